// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collage: an immutable 2D scene graph of drawable forms.
//!
//! A scene is a tree of [`Form`] values. Each form carries a position, a rotation,
//! a uniform scale and an opacity, plus a [`BasicForm`] payload: a traced
//! [`Polyline`], a styled [`Shape`], text, an image, a group of child forms, or a
//! piece of foreign markup. Forms may also carry event registrations, which are
//! opaque [`Handler`] values that renderers hand back to the host untouched.
//!
//! Forms are plain values. Every modifier consumes a form and returns a new one with
//! one field changed; nothing is mutated in place and children never point back at
//! their parents. Groups keep their children behind an `Arc`, so cloning a form is
//! cheap and shares the subtree.
//!
//! ## Building a scene
//!
//! ```
//! use collage::{Color, circle, dashed_line, group, plain, rectangle, segment, text};
//!
//! let scene = group([
//!     rectangle(40.0, 20.0).filled(Color::from_rgb8(0x33, 0x66, 0x99)),
//!     circle(5.0).filled(Color::WHITE).with_position(10.0, 0.0),
//!     segment((0.0, 0.0), (40.0, 0.0)).traced(dashed_line(1.0, Color::BLACK)),
//!     text("hello", plain(12)).with_position(0.0, 30.0),
//! ])
//! .with_angle(core::f64::consts::FRAC_PI_4)
//! .with_opacity(0.8);
//!
//! assert_eq!(scene.children().len(), 4);
//! ```
//!
//! ## Coordinates
//!
//! Geometry constructors center their output on the local origin. A form's local
//! coordinate system maps into its parent's by translating, then rotating, then
//! scaling; see [`Form::local_transform`]. No axis is flipped.
//!
//! Degenerate input is never rejected: empty point lists, zero scale and non-finite
//! numbers all flow through to the renderer unchanged.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod form;
mod geometry;
mod style;

pub use form::{
    BasicForm, EventBinding, Form, Handler, element, group, image, line, shape, text,
};
pub use geometry::{
    Polyline, Shape, circle, ellipse, ngon, oval, path, polygon, rectangle, segment, square,
};
pub use style::{
    GradientStop, LineCap, LineJoin, LineStyle, ShapeStyle, TextAlign, TextStyle, Texture, bold,
    bordered, dashed_line, dotted_line, filled_and_bordered, italic, plain, solid_fill,
    solid_line, textured_fill, underlined,
};

pub use kurbo::Point;
pub use peniko::Color;
