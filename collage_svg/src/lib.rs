// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG rendering for Collage scene trees.
//!
//! [`render`] (or [`Renderer::render`]) walks a [`Form`](collage::Form) tree depth
//! first and produces an [`SvgDocument`]:
//!
//! ```text
//! <svg xmlns=.. xmlns:xlink=.. width=.. height=.. version="1.1">
//!   <defs>pattern and gradient definitions</defs>
//!   elements mirroring the form tree
//! </svg>
//! ```
//!
//! ## Pipeline
//!
//! - [`texture`]: decides whether a paint is written inline (solid colors, `none`)
//!   or needs a `<pattern>`/`<linearGradient>` definition, and writes those blocks.
//! - [`attrs`]: computes each node's transform and its presentation attributes in
//!   a fixed order.
//! - [`Renderer`]: the traversal. It numbers lines and shapes in pre-order, starting
//!   from zero on every call; definition ids are derived from those numbers. Groups
//!   become `<g>` elements carrying the group's own transform and opacity.
//!
//! Output is deterministic: rendering the same tree twice yields identical bytes.
//! No state is kept between calls.
//!
//! ## Transforms
//!
//! Every element carries `transform="translate(x y) rotate(deg) scale(s)"`, always
//! in that order. Opacity is written per element and is not multiplied into
//! children; nesting `<g opacity>` elements composes it.
//!
//! ## Events
//!
//! Event registrations are not executed. An element with registrations gets a
//! [`LISTENER_ATTRIBUTE`] and [`SvgDocument::listeners`] lists the handlers to attach.
//!
//! ```
//! use collage::{Color, Handler, circle, group, plain, text};
//!
//! let scene = group([
//!     circle(10.0).filled(Color::BLACK).on("click", Handler::new("circle clicked")),
//!     text("label", plain(12)).with_position(0.0, 20.0),
//! ]);
//! let doc = collage_svg::render(&scene, 100.0, 100.0);
//! assert!(doc.as_str().starts_with("<svg"));
//! assert!(doc.as_str().contains("data-listener=\"0\""));
//! assert_eq!(doc.listeners().len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod attrs;
mod document;
mod fmt;
mod options;
mod serialize;
pub mod texture;

pub use document::{Fragment, LISTENER_ATTRIBUTE, ListenerBinding, SvgDocument};
pub use options::{ItalicStyle, OptionsError, RenderOptions};
pub use serialize::{Counters, RenderError, Renderer, render};
