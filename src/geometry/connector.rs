use super::{CubicBezier, Rect, Segment};
use serde::{Deserialize, Serialize};

/// The drawn shape of a flow or drop, in its local frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Connector {
    /// Both ends sit at the same height. Renderers fill the rectangle, since a
    /// gradient stroke along a horizontal line has a zero-height bounding box.
    Straight { rect: Rect },
    /// A stroked cubic, optionally preceded by a horizontal run.
    Curved {
        extension: Option<Segment>,
        curve: CubicBezier,
        stroke_width: f64,
    },
}

impl Connector {
    pub fn is_straight(&self) -> bool {
        matches!(self, Connector::Straight { .. })
    }

    /// Horizontal distance covered in the local frame.
    pub fn span(&self) -> f64 {
        match self {
            Connector::Straight { rect } => rect.width,
            Connector::Curved {
                extension, curve, ..
            } => {
                let start = extension.map_or(curve.start.x, |e| e.start.x);
                curve.end.x - start
            }
        }
    }

    /// SVG path data for the connector, with every x shifted by `origin_x`.
    pub fn to_path_data(&self, origin_x: f64) -> String {
        match self {
            Connector::Straight { rect } => format!(
                "M {} {} h {} v {} h {} Z",
                origin_x + rect.x,
                rect.y,
                rect.width,
                rect.height,
                -rect.width
            ),
            Connector::Curved {
                extension, curve, ..
            } => {
                let mut parts = Vec::with_capacity(3);
                match extension {
                    Some(segment) => {
                        parts.push(format!(
                            "M {} {}",
                            origin_x + segment.start.x,
                            segment.start.y
                        ));
                        parts.push(format!("L {} {}", origin_x + segment.end.x, segment.end.y));
                    }
                    None => parts.push(format!("M {} {}", origin_x + curve.start.x, curve.start.y)),
                }
                parts.push(format!(
                    "C {} {}, {} {}, {} {}",
                    origin_x + curve.control1.x,
                    curve.control1.y,
                    origin_x + curve.control2.x,
                    curve.control2.y,
                    origin_x + curve.end.x,
                    curve.end.y
                ));
                parts.join(" ")
            }
        }
    }
}
