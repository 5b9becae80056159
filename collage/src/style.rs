// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint sources and styling records for lines, shapes and text.

use alloc::sync::Arc;
use alloc::vec::Vec;
use peniko::Color;

/// A paint source.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Texture {
    /// Fully transparent; paints nothing.
    #[default]
    None,
    /// A single color, including its alpha channel.
    Solid(Color),
    /// A tiled image.
    Pattern {
        /// Tile width.
        width: f64,
        /// Tile height.
        height: f64,
        /// Image URL, referenced verbatim.
        url: Arc<str>,
        /// Opacity of the whole pattern.
        opacity: f64,
    },
    /// A linear gradient.
    LinearGradient {
        /// Gradient direction in radians.
        angle: f64,
        /// Stops in drawing order.
        stops: Vec<GradientStop>,
    },
}

impl Texture {
    /// Create a tiled image pattern.
    pub fn pattern(width: f64, height: f64, url: impl Into<Arc<str>>, opacity: f64) -> Self {
        Self::Pattern {
            width,
            height,
            url: url.into(),
            opacity,
        }
    }

    /// Create a linear gradient from `(offset, color)` pairs.
    pub fn linear_gradient(angle: f64, stops: impl IntoIterator<Item = (f64, Color)>) -> Self {
        Self::LinearGradient {
            angle,
            stops: stops
                .into_iter()
                .map(|(offset, color)| GradientStop { offset, color })
                .collect(),
        }
    }
}

impl From<Color> for Texture {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

/// One stop of a [`Texture::LinearGradient`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient, in `[0, 1]`.
    pub offset: f64,
    /// Color at this stop.
    pub color: Color,
}

/// How the ends of a line are drawn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineCap {
    /// Semicircular end caps.
    Round,
    /// Square caps extending past the endpoint by half the line width.
    Square,
    /// The line ends exactly at its endpoint.
    #[default]
    Flat,
}

/// How consecutive line segments are joined.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineJoin {
    /// Rounded joins.
    Smooth,
    /// Mitered joins.
    #[default]
    Sharp,
    /// Beveled joins.
    Bevel,
}

impl From<LineCap> for kurbo::Cap {
    fn from(cap: LineCap) -> Self {
        match cap {
            LineCap::Round => Self::Round,
            LineCap::Square => Self::Square,
            LineCap::Flat => Self::Butt,
        }
    }
}

impl From<LineJoin> for kurbo::Join {
    fn from(join: LineJoin) -> Self {
        match join {
            LineJoin::Smooth => Self::Round,
            LineJoin::Sharp => Self::Miter,
            LineJoin::Bevel => Self::Bevel,
        }
    }
}

/// Stroke styling for lines and shape borders.
#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    /// Stroke paint.
    pub texture: Texture,
    /// Stroke width.
    pub width: f64,
    /// End cap style.
    pub cap: LineCap,
    /// Join style.
    pub join: LineJoin,
    /// Alternating dash and gap lengths. Empty means a solid line.
    pub dashing: Vec<u32>,
    /// Offset into the dash pattern.
    pub dash_offset: i32,
}

impl Default for LineStyle {
    /// A solid black line, one unit wide.
    fn default() -> Self {
        Self {
            texture: Texture::Solid(Color::BLACK),
            width: 1.0,
            cap: LineCap::default(),
            join: LineJoin::default(),
            dashing: Vec::new(),
            dash_offset: 0,
        }
    }
}

impl LineStyle {
    /// An invisible line: no paint and zero width.
    pub fn none() -> Self {
        Self {
            texture: Texture::None,
            width: 0.0,
            ..Self::default()
        }
    }

    /// Replace the stroke paint.
    #[must_use]
    pub fn with_texture(self, texture: impl Into<Texture>) -> Self {
        Self {
            texture: texture.into(),
            ..self
        }
    }

    /// Replace the width.
    #[must_use]
    pub fn with_width(self, width: f64) -> Self {
        Self { width, ..self }
    }

    /// Replace the cap style.
    #[must_use]
    pub fn with_cap(self, cap: LineCap) -> Self {
        Self { cap, ..self }
    }

    /// Replace the join style.
    #[must_use]
    pub fn with_join(self, join: LineJoin) -> Self {
        Self { join, ..self }
    }

    /// Replace the dash pattern and offset.
    #[must_use]
    pub fn with_dashes(self, offset: i32, dashing: impl IntoIterator<Item = u32>) -> Self {
        Self {
            dashing: dashing.into_iter().collect(),
            dash_offset: offset,
            ..self
        }
    }

    /// The equivalent kurbo stroke, for hosts that rasterize forms themselves.
    pub fn to_stroke(&self) -> kurbo::Stroke {
        kurbo::Stroke::new(self.width)
            .with_caps(self.cap.into())
            .with_join(self.join.into())
            .with_dashes(
                f64::from(self.dash_offset),
                self.dashing.iter().map(|d| f64::from(*d)),
            )
    }
}

/// A solid line of the given width and color.
pub fn solid_line(width: f64, color: Color) -> LineStyle {
    LineStyle::default()
        .with_width(width)
        .with_texture(color)
}

/// A dashed line with an `[8, 4]` dash pattern.
pub fn dashed_line(width: f64, color: Color) -> LineStyle {
    solid_line(width, color).with_dashes(0, [8, 4])
}

/// A dotted line with a `[2, 2]` dash pattern.
pub fn dotted_line(width: f64, color: Color) -> LineStyle {
    solid_line(width, color).with_dashes(0, [2, 2])
}

/// Fill and border styling for closed shapes.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeStyle {
    /// Interior paint.
    pub fill: Texture,
    /// Outline.
    pub border: LineStyle,
}

/// A shape filled with a single color and no border.
pub fn solid_fill(color: Color) -> ShapeStyle {
    textured_fill(Texture::Solid(color))
}

/// A shape filled with an arbitrary texture and no border.
pub fn textured_fill(fill: Texture) -> ShapeStyle {
    ShapeStyle {
        fill,
        border: LineStyle::none(),
    }
}

/// A shape with a border and a transparent interior.
pub fn bordered(border: LineStyle) -> ShapeStyle {
    ShapeStyle {
        fill: Texture::None,
        border,
    }
}

/// A shape with both a fill and a border.
pub fn filled_and_bordered(fill: impl Into<Texture>, border: LineStyle) -> ShapeStyle {
    ShapeStyle {
        fill: fill.into(),
        border,
    }
}

/// Horizontal anchoring of text relative to its position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// Centered on the position.
    #[default]
    Center,
    /// Starts at the position.
    Left,
    /// Ends at the position.
    Right,
}

/// Font and paint styling for text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Glyph paint.
    pub texture: Texture,
    /// Point size.
    pub size: u32,
    /// Font family name.
    pub family: Arc<str>,
    /// Italic glyphs.
    pub italic: bool,
    /// Bold glyphs.
    pub bold: bool,
    /// Underline decoration.
    pub underline: bool,
    /// Horizontal alignment.
    pub align: TextAlign,
}

impl TextStyle {
    /// Plain black sans-serif text of the given size.
    pub fn new(size: u32) -> Self {
        Self {
            texture: Texture::Solid(Color::BLACK),
            size,
            family: Arc::from("sans-serif"),
            italic: false,
            bold: false,
            underline: false,
            align: TextAlign::Center,
        }
    }

    /// Replace the glyph paint.
    #[must_use]
    pub fn with_texture(self, texture: impl Into<Texture>) -> Self {
        Self {
            texture: texture.into(),
            ..self
        }
    }

    /// Replace the font family.
    #[must_use]
    pub fn with_family(self, family: impl Into<Arc<str>>) -> Self {
        Self {
            family: family.into(),
            ..self
        }
    }

    /// Replace the point size.
    #[must_use]
    pub fn with_size(self, size: u32) -> Self {
        Self { size, ..self }
    }

    /// Toggle bold glyphs.
    #[must_use]
    pub fn with_bold(self, bold: bool) -> Self {
        Self { bold, ..self }
    }

    /// Toggle italic glyphs.
    #[must_use]
    pub fn with_italic(self, italic: bool) -> Self {
        Self { italic, ..self }
    }

    /// Toggle the underline decoration.
    #[must_use]
    pub fn with_underline(self, underline: bool) -> Self {
        Self { underline, ..self }
    }

    /// Replace the alignment.
    #[must_use]
    pub fn with_align(self, align: TextAlign) -> Self {
        Self { align, ..self }
    }
}

/// Plain text of the given size.
pub fn plain(size: u32) -> TextStyle {
    TextStyle::new(size)
}

/// Bold text of the given size.
pub fn bold(size: u32) -> TextStyle {
    TextStyle::new(size).with_bold(true)
}

/// Italic text of the given size.
pub fn italic(size: u32) -> TextStyle {
    TextStyle::new(size).with_italic(true)
}

/// Underlined text of the given size.
pub fn underlined(size: u32) -> TextStyle {
    TextStyle::new(size).with_underline(true)
}
