// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-node transforms and presentation attributes.
//!
//! Attribute lists are returned in a fixed order so that output is byte-for-byte
//! reproducible. Geometry attributes (`points`, `rx`, `width`, ...) are written by
//! the serializer; this module only deals with paint, font and placement.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use collage::{BasicForm, Form, LineCap, LineJoin, LineStyle, TextAlign, TextStyle, Texture};

use crate::RenderOptions;
use crate::fmt::fmt_f64;
use crate::texture::{
    PaintRole, alpha_of, definition_id, degrees, needs_definition, paint_reference,
};

/// An ordered list of `(name, value)` attribute pairs. Values are unescaped.
pub type Attributes = Vec<(&'static str, String)>;

/// The local-to-parent transform of `form`: translate, then rotate, then scale.
pub fn transform_of(form: &Form) -> String {
    format!(
        "translate({} {}) rotate({}) scale({})",
        fmt_f64(form.x),
        fmt_f64(form.y),
        fmt_f64(degrees(form.theta)),
        fmt_f64(form.scale)
    )
}

/// Presentation attributes for `form`, numbered `node` in traversal order.
///
/// `node` only matters for lines and shapes whose textures need a definition.
pub fn attributes_of(form: &Form, node: u64, options: &RenderOptions) -> Attributes {
    let mut attrs = Attributes::new();
    match &form.basic {
        BasicForm::Line { style, .. } => {
            attrs.push(("fill", String::from("none")));
            let id = definition_id(&options.id_prefix, PaintRole::Stroke, node);
            push_stroke(&mut attrs, style, &id);
            push_placement(&mut attrs, form);
            push_dashes(&mut attrs, style);
        }
        BasicForm::Shape { style, .. } => {
            let fill_id = definition_id(&options.id_prefix, PaintRole::Fill, node);
            attrs.push(("fill", paint_reference(&style.fill, &fill_id)));
            attrs.push(("fill-opacity", alpha_of(&style.fill)));
            let stroke_id = definition_id(&options.id_prefix, PaintRole::Stroke, node);
            push_stroke(&mut attrs, &style.border, &stroke_id);
            push_placement(&mut attrs, form);
            push_dashes(&mut attrs, &style.border);
        }
        BasicForm::Text { style, .. } => {
            push_text(&mut attrs, style, options);
            push_placement(&mut attrs, form);
        }
        BasicForm::Image { .. } | BasicForm::Group(_) | BasicForm::Element(_) => {
            push_placement(&mut attrs, form);
        }
    }
    attrs
}

fn push_placement(attrs: &mut Attributes, form: &Form) {
    attrs.push(("opacity", fmt_f64(form.alpha)));
    attrs.push(("transform", transform_of(form)));
}

fn push_stroke(attrs: &mut Attributes, style: &LineStyle, id: &str) {
    attrs.push(("stroke", paint_reference(&style.texture, id)));
    attrs.push(("stroke-opacity", alpha_of(&style.texture)));
    attrs.push(("stroke-width", fmt_f64(style.width)));
    attrs.push(("stroke-linecap", String::from(cap_svg(style.cap))));
    attrs.push(("stroke-linejoin", String::from(join_svg(style.join))));
}

fn push_dashes(attrs: &mut Attributes, style: &LineStyle) {
    attrs.push(("stroke-dashoffset", format!("{}", style.dash_offset)));
    if !style.dashing.is_empty() {
        let mut dashes = String::new();
        for (i, d) in style.dashing.iter().enumerate() {
            if i > 0 {
                dashes.push(',');
            }
            let _ = write!(dashes, "{d}");
        }
        attrs.push(("stroke-dasharray", dashes));
    }
}

fn push_text(attrs: &mut Attributes, style: &TextStyle, options: &RenderOptions) {
    // Text is never numbered, so it has no id to point a definition at.
    let fallback;
    let texture = if needs_definition(&style.texture) {
        log::debug!("text paint needs a definition; falling back to solid black");
        fallback = Texture::Solid(collage::Color::BLACK);
        &fallback
    } else {
        &style.texture
    };
    attrs.push(("fill", paint_reference(texture, "")));
    attrs.push(("fill-opacity", alpha_of(texture)));
    attrs.push(("font-family", String::from(&*style.family)));
    attrs.push(("font-size", format!("{}", style.size)));
    attrs.push((
        "font-weight",
        String::from(if style.bold { "bold" } else { "normal" }),
    ));
    attrs.push((
        "font-style",
        String::from(if style.italic {
            options.italic_style.as_str()
        } else {
            "normal"
        }),
    ));
    attrs.push((
        "text-decoration",
        String::from(if style.underline { "underline" } else { "none" }),
    ));
    attrs.push(("text-anchor", String::from(anchor_svg(style.align))));
    attrs.push(("dominant-baseline", String::from("middle")));
}

fn cap_svg(cap: LineCap) -> &'static str {
    match cap {
        LineCap::Round => "round",
        LineCap::Square => "square",
        LineCap::Flat => "butt",
    }
}

fn join_svg(join: LineJoin) -> &'static str {
    match join {
        LineJoin::Smooth => "round",
        LineJoin::Sharp => "miter",
        LineJoin::Bevel => "bevel",
    }
}

fn anchor_svg(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Center => "middle",
        TextAlign::Left => "start",
        TextAlign::Right => "end",
    }
}
