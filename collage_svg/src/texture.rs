// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Texture resolution: inline paint values and shared `<defs>` entries.
//!
//! Solid colors and [`Texture::None`] are written straight into paint attributes.
//! Patterns and linear gradients need a definition block, which is keyed by an id
//! derived from the node's generated integer (see [`definition_id`]).
//!
//! Ids follow the node sequence, not texture content. Two nodes that use the same
//! gradient get two ids and two definition blocks.

use alloc::format;
use alloc::string::String;
use core::fmt::Write as _;

use collage::Texture;

use crate::fmt::{color_alpha, color_rgb, fmt_f64, push_escaped_attr};

/// Which paint slot of a node a definition belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PaintRole {
    /// A shape's interior.
    Fill,
    /// A line, or a shape's border.
    Stroke,
}

impl PaintRole {
    /// The role name used inside generated ids.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Stroke => "stroke",
        }
    }
}

/// The definition id for `role` on the node numbered `node`.
pub fn definition_id(prefix: &str, role: PaintRole, node: u64) -> String {
    format!("{prefix}{}{node}", role.as_str())
}

/// Returns true if the texture must be emitted as a definition block.
pub fn needs_definition(texture: &Texture) -> bool {
    matches!(
        texture,
        Texture::Pattern { .. } | Texture::LinearGradient { .. }
    )
}

/// The paint attribute value for `texture`.
///
/// `id` is only used for textures that need a definition.
pub fn paint_reference(texture: &Texture, id: &str) -> String {
    match texture {
        Texture::None => String::from("none"),
        Texture::Solid(color) => color_rgb(*color),
        Texture::Pattern { .. } | Texture::LinearGradient { .. } => format!("url(#{id})"),
    }
}

/// The paint opacity attribute value for `texture`.
///
/// Gradients report `1`; their stops carry their own opacity.
pub fn alpha_of(texture: &Texture) -> String {
    match texture {
        Texture::None => String::from("0"),
        Texture::Solid(color) => color_alpha(*color),
        Texture::Pattern { opacity, .. } => fmt_f64(*opacity),
        Texture::LinearGradient { .. } => String::from("1"),
    }
}

/// Radians to degrees, as used by SVG `rotate()`.
pub(crate) fn degrees(radians: f64) -> f64 {
    radians / core::f64::consts::TAU * 360.0
}

/// Append the definition block for `texture` to `defs`.
///
/// Returns false, writing nothing, for textures that are referenced inline.
pub fn write_definition(defs: &mut String, texture: &Texture, id: &str) -> bool {
    match texture {
        Texture::None | Texture::Solid(_) => return false,
        Texture::Pattern {
            width, height, url, ..
        } => {
            let w = fmt_f64(*width);
            let h = fmt_f64(*height);
            let _ = write!(
                defs,
                "<pattern id=\"{id}\" patternUnits=\"userSpaceOnUse\" width=\"{w}\" height=\"{h}\"><image xlink:href=\""
            );
            push_escaped_attr(defs, url);
            let _ = write!(defs, "\" width=\"{w}\" height=\"{h}\"/></pattern>");
        }
        Texture::LinearGradient { angle, stops } => {
            let _ = write!(
                defs,
                "<linearGradient id=\"{id}\" gradientTransform=\"rotate({})\">",
                fmt_f64(degrees(*angle))
            );
            for stop in stops {
                let _ = write!(
                    defs,
                    "<stop offset=\"{}\" stop-color=\"{}\" stop-opacity=\"{}\"/>",
                    fmt_f64(stop.offset),
                    color_rgb(stop.color),
                    color_alpha(stop.color)
                );
            }
            defs.push_str("</linearGradient>");
        }
    }
    log::trace!("emitted definition {id}");
    true
}
