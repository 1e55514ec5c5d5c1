use super::Point;
use serde::{Deserialize, Serialize};

pub const DROP_GRADIENT_ID: &str = "funnel-gradient-drop";

/// Coordinate system of a gradient vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradientUnits {
    /// Pixels in the local frame of the shape using the gradient.
    UserSpace,
    /// Fractions of the shape's bounding box.
    BoundingBox,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the vector, `0.0..=1.0`.
    pub offset: f64,
    pub color: String,
}

/// A two-stop linear color ramp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub id: String,
    /// The flow this gradient belongs to; `None` for the shared drop gradient.
    pub flow_id: Option<String>,
    pub start: Point,
    pub end: Point,
    pub units: GradientUnits,
    pub stops: [GradientStop; 2],
}

impl Gradient {
    /// Source color to target color along one bucket width of local x.
    ///
    /// Flows with the same id get the same gradient; the engine emits it once.
    pub fn for_flow(flow_id: &str, from_color: &str, to_color: &str, bucket_width: f64) -> Self {
        Self {
            id: format!("funnel-gradient-{}", flow_id),
            flow_id: Some(flow_id.to_string()),
            start: Point::new(0.0, 0.0),
            end: Point::new(bucket_width, 0.0),
            units: GradientUnits::UserSpace,
            stops: two_stops(from_color, to_color),
        }
    }

    /// The single vertical fade shared by every drop.
    pub fn for_drops(start_color: &str, stop_color: &str) -> Self {
        Self {
            id: DROP_GRADIENT_ID.to_string(),
            flow_id: None,
            start: Point::new(0.0, 0.0),
            end: Point::new(0.0, 1.0),
            units: GradientUnits::BoundingBox,
            stops: two_stops(start_color, stop_color),
        }
    }

    /// `url(#id)` reference for fills and strokes.
    pub fn url(&self) -> String {
        format!("url(#{})", self.id)
    }
}

fn two_stops(start: &str, stop: &str) -> [GradientStop; 2] {
    [
        GradientStop {
            offset: 0.0,
            color: start.to_string(),
        },
        GradientStop {
            offset: 1.0,
            color: stop.to_string(),
        },
    ]
}
