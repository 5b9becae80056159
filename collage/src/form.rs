// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Forms: the nodes of the scene tree.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;

use kurbo::Affine;
use peniko::Color;

use crate::geometry::{Polyline, Shape};
use crate::style::{LineStyle, ShapeStyle, TextStyle, solid_fill};

/// An opaque event decoder attached to a form.
///
/// The scene tree never calls a handler; it only carries it through to the
/// renderer's listener bindings. Hosts recover their concrete decoder type with
/// [`Handler::downcast_ref`].
#[derive(Clone)]
pub struct Handler(Arc<dyn Any + Send + Sync>);

impl Handler {
    /// Wrap a decoder of any type.
    pub fn new<T: Any + Send + Sync>(decoder: T) -> Self {
        Self(Arc::new(decoder))
    }

    /// Borrow the decoder if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Returns true if both handlers wrap the same decoder allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handler").finish_non_exhaustive()
    }
}

/// Handlers compare by identity.
impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

/// One `(event name, decoder)` registration.
#[derive(Clone, Debug, PartialEq)]
pub struct EventBinding {
    /// Native event name, such as `"click"`.
    pub event: Arc<str>,
    /// Decoder to attach.
    pub handler: Handler,
}

/// The drawable payload of a [`Form`].
#[derive(Clone, Debug, PartialEq)]
pub enum BasicForm {
    /// An open polyline.
    Line {
        /// Points to connect.
        path: Polyline,
        /// Stroke styling.
        style: LineStyle,
    },
    /// A closed shape.
    Shape {
        /// Geometry.
        shape: Shape,
        /// Fill and border styling.
        style: ShapeStyle,
    },
    /// A run of text.
    Text {
        /// The text itself.
        content: Arc<str>,
        /// Font, paint and alignment.
        style: TextStyle,
    },
    /// An image centered on the local origin.
    Image {
        /// Image URL, referenced verbatim.
        url: Arc<str>,
        /// Display width.
        width: f64,
        /// Display height.
        height: f64,
    },
    /// Child forms, painted first to last.
    Group(Arc<[Form]>),
    /// Foreign markup embedded verbatim.
    Element(Arc<str>),
}

/// A node of the scene tree.
///
/// Forms are immutable values: each modifier consumes the form and returns a new one
/// with a single field changed. Group children are reference counted, so cloning a
/// form shares its subtree.
#[derive(Clone, Debug, PartialEq)]
pub struct Form {
    /// Horizontal position in the parent's coordinate system.
    pub x: f64,
    /// Vertical position in the parent's coordinate system.
    pub y: f64,
    /// Rotation in radians.
    pub theta: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
    /// Drawable payload.
    pub basic: BasicForm,
    /// Event registrations, in registration order.
    pub events: Vec<EventBinding>,
}

impl Form {
    /// A form at the origin with no rotation, unit scale and full opacity.
    pub fn new(basic: BasicForm) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            theta: 0.0,
            scale: 1.0,
            alpha: 1.0,
            basic,
            events: Vec::new(),
        }
    }

    /// Set the position.
    #[must_use]
    pub fn with_position(self, x: f64, y: f64) -> Self {
        Self { x, y, ..self }
    }

    /// Set the rotation, in radians.
    #[must_use]
    pub fn with_angle(self, theta: f64) -> Self {
        Self { theta, ..self }
    }

    /// Set the uniform scale factor.
    #[must_use]
    pub fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    /// Set the opacity.
    #[must_use]
    pub fn with_opacity(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Move relative to the current position.
    #[must_use]
    pub fn shift(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Rotate relative to the current angle, in radians.
    #[must_use]
    pub fn rotate(self, dtheta: f64) -> Self {
        Self {
            theta: self.theta + dtheta,
            ..self
        }
    }

    /// Multiply the current scale factor.
    #[must_use]
    pub fn scale_by(self, factor: f64) -> Self {
        Self {
            scale: self.scale * factor,
            ..self
        }
    }

    /// Attach a decoder for `event`.
    ///
    /// Earlier registrations are kept, including ones for the same event name.
    #[must_use]
    pub fn on(mut self, event: impl Into<Arc<str>>, handler: Handler) -> Self {
        self.events.push(EventBinding {
            event: event.into(),
            handler,
        });
        self
    }

    /// Local-to-parent transform: translate, then rotate, then scale.
    pub fn local_transform(&self) -> Affine {
        Affine::translate((self.x, self.y))
            * Affine::rotate(self.theta)
            * Affine::scale(self.scale)
    }

    /// Children of a group, or an empty slice for any other payload.
    pub fn children(&self) -> &[Self] {
        match &self.basic {
            BasicForm::Group(children) => &children[..],
            _ => &[],
        }
    }
}

/// Trace a polyline with a line style.
pub fn line(path: Polyline, style: LineStyle) -> Form {
    Form::new(BasicForm::Line { path, style })
}

/// Draw a shape with a shape style.
pub fn shape(shape: Shape, style: ShapeStyle) -> Form {
    Form::new(BasicForm::Shape { shape, style })
}

/// Draw text.
pub fn text(content: impl Into<Arc<str>>, style: TextStyle) -> Form {
    Form::new(BasicForm::Text {
        content: content.into(),
        style,
    })
}

/// Draw an image of the given display size.
pub fn image(url: impl Into<Arc<str>>, width: f64, height: f64) -> Form {
    Form::new(BasicForm::Image {
        url: url.into(),
        width,
        height,
    })
}

/// Group forms; later forms paint over earlier ones.
pub fn group(forms: impl IntoIterator<Item = Form>) -> Form {
    Form::new(BasicForm::Group(forms.into_iter().collect()))
}

/// Embed foreign markup verbatim.
pub fn element(markup: impl Into<Arc<str>>) -> Form {
    Form::new(BasicForm::Element(markup.into()))
}

impl Polyline {
    /// Trace this polyline with `style`.
    pub fn traced(self, style: LineStyle) -> Form {
        line(self, style)
    }
}

impl Shape {
    /// Draw this shape with `style`.
    pub fn styled(self, style: ShapeStyle) -> Form {
        shape(self, style)
    }

    /// Fill this shape with a solid color.
    pub fn filled(self, color: Color) -> Form {
        shape(self, solid_fill(color))
    }

    /// Outline this shape without filling it.
    pub fn outlined(self, border: LineStyle) -> Form {
        shape(self, crate::style::bordered(border))
    }
}
