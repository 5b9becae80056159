// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry payloads: open polylines and closed shapes.
//!
//! All geometry is expressed in the local coordinate system of the [`Form`](crate::Form)
//! that carries it. The constructors here center their output on the local origin so
//! that position, rotation and scale behave predictably.
//!
//! Degenerate geometry (no points, a single point, non-finite coordinates, negative
//! radii) is accepted as-is and passed through to renderers unchanged.

use alloc::vec::Vec;
use kurbo::{Point, Rect, Vec2};

/// An open sequence of points, drawn as connected line segments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    /// Points in drawing order. May be empty.
    pub points: Vec<Point>,
}

impl Polyline {
    /// Create a polyline from a sequence of points.
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// Returns true if the polyline has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A closed shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A polygon. Renderers close it implicitly; the last point need not repeat the first.
    Polygon(Vec<Point>),
    /// An axis-aligned ellipse centered on the local origin.
    Ellipse {
        /// Horizontal radius.
        rx: f64,
        /// Vertical radius.
        ry: f64,
    },
}

impl Shape {
    /// Local-space bounding box of the shape.
    ///
    /// An empty polygon yields [`Rect::ZERO`]. Ellipse radii are used as given, so
    /// negative radii produce an inverted rectangle.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Polygon(points) => bounds_of(points),
            Self::Ellipse { rx, ry } => Rect::new(-rx, -ry, *rx, *ry),
        }
    }
}

impl Polyline {
    /// Local-space bounding box of the polyline; [`Rect::ZERO`] when empty.
    pub fn bounding_box(&self) -> Rect {
        bounds_of(&self.points)
    }
}

fn bounds_of(points: &[Point]) -> Rect {
    let mut iter = points.iter();
    let Some(first) = iter.next() else {
        return Rect::ZERO;
    };
    iter.fold(Rect::from_points(*first, *first), |acc, p| acc.union_pt(*p))
}

/// Create a polygon from its vertices.
pub fn polygon(points: impl IntoIterator<Item = Point>) -> Shape {
    Shape::Polygon(points.into_iter().collect())
}

/// A `w` by `h` rectangle centered on the origin.
///
/// Corners are emitted in the order top-left `(-w/2, h/2)`, top-right, bottom-right,
/// bottom-left.
pub fn rectangle(w: f64, h: f64) -> Shape {
    let hw = w / 2.0;
    let hh = h / 2.0;
    Shape::Polygon(alloc::vec![
        Point::new(-hw, hh),
        Point::new(hw, hh),
        Point::new(hw, -hh),
        Point::new(-hw, -hh),
    ])
}

/// A square with side length `n`.
pub fn square(n: f64) -> Shape {
    rectangle(n, n)
}

/// An ellipse with the given radii.
pub fn ellipse(rx: f64, ry: f64) -> Shape {
    Shape::Ellipse { rx, ry }
}

/// An ellipse that fits a `w` by `h` box.
pub fn oval(w: f64, h: f64) -> Shape {
    ellipse(w / 2.0, h / 2.0)
}

/// A circle of radius `r`.
pub fn circle(r: f64) -> Shape {
    ellipse(r, r)
}

/// A regular polygon with `sides` vertices on a circle of radius `r`.
///
/// The first vertex lies at angle zero, on the positive x axis. Zero sides yields an
/// empty polygon.
pub fn ngon(sides: u32, r: f64) -> Shape {
    let step = core::f64::consts::TAU / f64::from(sides.max(1));
    Shape::Polygon(
        (0..sides)
            .map(|i| Point::ORIGIN + Vec2::from_angle(step * f64::from(i)) * r)
            .collect(),
    )
}

/// An open path through the given points.
pub fn path(points: impl IntoIterator<Item = Point>) -> Polyline {
    Polyline::new(points)
}

/// A single line segment from `a` to `b`.
pub fn segment(a: impl Into<Point>, b: impl Into<Point>) -> Polyline {
    Polyline {
        points: alloc::vec![a.into(), b.into()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_corner_order() {
        let Shape::Polygon(points) = rectangle(10.0, 20.0) else {
            panic!("rectangle should be a polygon");
        };
        assert_eq!(
            points,
            [
                Point::new(-5.0, 10.0),
                Point::new(5.0, 10.0),
                Point::new(5.0, -10.0),
                Point::new(-5.0, -10.0),
            ]
        );
    }

    #[test]
    fn circle_and_oval_are_ellipses() {
        assert_eq!(circle(3.0), Shape::Ellipse { rx: 3.0, ry: 3.0 });
        assert_eq!(oval(4.0, 2.0), Shape::Ellipse { rx: 2.0, ry: 1.0 });
    }

    #[test]
    fn ngon_vertex_count_and_first_vertex() {
        let Shape::Polygon(points) = ngon(6, 2.0) else {
            panic!("ngon should be a polygon");
        };
        assert_eq!(points.len(), 6);
        assert!((points[0].x - 2.0).abs() < 1e-12);
        assert!(points[0].y.abs() < 1e-12);
        assert_eq!(ngon(0, 1.0), Shape::Polygon(Vec::new()));
    }

    #[test]
    fn segment_has_two_points() {
        let s = segment((0.0, 0.0), (3.0, 4.0));
        assert_eq!(s.points, [Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
    }

    #[test]
    fn bounds_of_degenerate_geometry() {
        assert_eq!(Polyline::default().bounding_box(), Rect::ZERO);
        assert_eq!(
            rectangle(10.0, 20.0).bounding_box(),
            Rect::new(-5.0, -10.0, 5.0, 10.0)
        );
        assert_eq!(circle(2.0).bounding_box(), Rect::new(-2.0, -2.0, 2.0, 2.0));
    }
}
