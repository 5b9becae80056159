// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number, color and text formatting shared by the SVG writers.
//!
//! Numbers use Rust's shortest round-trip `Display` output so that every value
//! survives a parse back unchanged. Negative zero prints as `0`; non-finite values
//! print as `NaN`, `inf` or `-inf`.

use alloc::format;
use alloc::string::String;
use core::fmt::Write as _;

use kurbo::Point;
use peniko::Color;

pub(crate) fn fmt_f64(v: f64) -> String {
    if v == 0.0 {
        return String::from("0");
    }
    format!("{v}")
}

pub(crate) fn fmt_f32(v: f32) -> String {
    if v == 0.0 {
        return String::from("0");
    }
    format!("{v}")
}

/// `#rrggbb`, ignoring alpha.
pub(crate) fn color_rgb(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

/// The unquantized alpha channel.
pub(crate) fn color_alpha(color: Color) -> String {
    fmt_f32(color.components[3])
}

/// `x,y` pairs separated by spaces, as used by `points` attributes.
pub(crate) fn points(points: &[Point]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{},{}", fmt_f64(p.x), fmt_f64(p.y));
    }
    out
}

pub(crate) fn push_escaped_text(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

pub(crate) fn push_escaped_attr(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_use_shortest_display() {
        assert_eq!(fmt_f64(10.0), "10");
        assert_eq!(fmt_f64(0.1), "0.1");
        assert_eq!(fmt_f64(-2.5), "-2.5");
        assert_eq!(fmt_f64(-0.0), "0");
        assert_eq!(fmt_f64(f64::NAN), "NaN");
        assert_eq!(fmt_f64(f64::INFINITY), "inf");
        assert_eq!(fmt_f32(0.5), "0.5");
    }

    #[test]
    fn colors() {
        let c = Color::from_rgba8(255, 0, 128, 255);
        assert_eq!(color_rgb(c), "#ff0080");
        assert_eq!(color_alpha(c), "1");
        assert_eq!(color_alpha(Color::new([0.0, 0.0, 0.0, 0.5])), "0.5");
    }

    #[test]
    fn points_list() {
        assert_eq!(points(&[]), "");
        assert_eq!(
            points(&[Point::new(-5.0, 10.0), Point::new(5.0, 10.0)]),
            "-5,10 5,10"
        );
    }

    #[test]
    fn escaping() {
        let mut out = String::new();
        push_escaped_text(&mut out, "a < b & \"c\"");
        assert_eq!(out, "a &lt; b &amp; \"c\"");

        let mut out = String::new();
        push_escaped_attr(&mut out, "x\"y&z");
        assert_eq!(out, "x&quot;y&amp;z");
    }
}
