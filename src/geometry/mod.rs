//! Geometric primitives and the connector geometry derived for flows and drops.

pub mod connector;
pub mod curve;
pub mod gradient;
pub mod label;

pub use connector::Connector;
pub use curve::{CurveContext, DropGeometry, FlowGeometry};
pub use gradient::{DROP_GRADIENT_ID, Gradient, GradientStop, GradientUnits};
pub use label::{Label, LabelPill};

use serde::{Deserialize, Serialize};

/// Vertical centers closer than this are treated as coinciding.
pub const STRAIGHT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// A straight line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

impl CubicBezier {
    /// Point on the curve at parameter `t` in `[0, 1]`.
    pub fn point_at(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;
        Point::new(
            a * self.start.x + b * self.control1.x + c * self.control2.x + d * self.end.x,
            a * self.start.y + b * self.control1.y + c * self.control2.y + d * self.end.y,
        )
    }

    /// Exact cubic form of the quadratic curve `start -> control -> end`.
    pub fn from_quadratic(start: Point, control: Point, end: Point) -> Self {
        let two_thirds = 2.0 / 3.0;
        Self {
            start,
            control1: Point::new(
                start.x + two_thirds * (control.x - start.x),
                start.y + two_thirds * (control.y - start.y),
            ),
            control2: Point::new(
                end.x + two_thirds * (control.x - end.x),
                end.y + two_thirds * (control.y - end.y),
            ),
            end,
        }
    }
}
