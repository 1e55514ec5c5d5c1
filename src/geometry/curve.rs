use super::gradient::DROP_GRADIENT_ID;
use super::{Connector, CubicBezier, Label, Point, Rect, STRAIGHT_TOLERANCE, Segment};
use crate::options::{CurvatureStyle, LabelStyle, LayoutOptions};
use serde::{Deserialize, Serialize};

const MIN_SPAN_RADIUS: f64 = 2.0;
const DROP_TITLE_INSET: f64 = 5.0;

/// Geometry of one flow. Connector and label coordinates are local: x is
/// relative to `origin_x`, y is relative to the content area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowGeometry {
    pub origin_x: f64,
    /// Vertical center of the band where it leaves the source bucket.
    pub y1: f64,
    /// Vertical center of the band where it enters the target bucket.
    pub y2: f64,
    pub connector: Connector,
    pub label: Label,
    pub gradient_id: String,
}

/// Geometry of one drop, local to `anchor` (the top of the turn at the
/// bucket's right edge).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropGeometry {
    pub anchor: Point,
    /// Quarter turn from the bucket edge down into the drop column.
    pub connector: Connector,
    pub body: Rect,
    /// Strip below the body filled with the shared drop gradient.
    pub fade: Rect,
    pub fade_gradient_id: String,
    pub title_anchor: Point,
    pub label: Label,
}

/// Everything the curve computations need from the current pass.
#[derive(Debug, Clone, Copy)]
pub struct CurveContext<'a> {
    pub bucket_width: f64,
    pub content_height: f64,
    pub curvature: CurvatureStyle,
    pub drop_radius: f64,
    pub drop_padding: f64,
    pub label: &'a LabelStyle,
}

impl<'a> CurveContext<'a> {
    pub fn new(options: &'a LayoutOptions, bucket_width: f64, content_height: f64) -> Self {
        Self {
            bucket_width,
            content_height,
            curvature: options.curvature,
            drop_radius: options.drop_radius,
            drop_padding: options.drop_padding,
            label: &options.label,
        }
    }

    /// Connects a band of thickness `height` from `(x1, y1)` to `(x2, y2)`.
    pub fn flow(
        &self,
        flow_id: &str,
        (x1, y1): (f64, f64),
        (x2, y2): (f64, f64),
        height: f64,
        percent: f64,
    ) -> FlowGeometry {
        let origin_x = x1.min(x2);
        let width = (x2 - x1).abs();

        let (connector, label_anchor) = if (y1 - y2).abs() <= STRAIGHT_TOLERANCE {
            let rect = Rect::new(0.0, y1 - height / 2.0, width, height);
            (Connector::Straight { rect }, Point::new(width / 2.0, y1))
        } else {
            let has_extension = width > 2.0 * self.bucket_width;
            let curve_x = if has_extension {
                width - self.bucket_width
            } else {
                0.0
            };
            let span = width - curve_x;
            let pull = span / self.radius(y1, y2);

            let extension = has_extension.then(|| Segment {
                start: Point::new(0.0, y1),
                end: Point::new(curve_x, y1),
            });
            let curve = CubicBezier {
                start: Point::new(curve_x, y1),
                control1: Point::new(curve_x + pull, y1),
                control2: Point::new(width - pull, y2),
                end: Point::new(width, y2),
            };
            let anchor = if has_extension {
                Point::new(curve_x / 2.0, y1)
            } else {
                Point::new(width / 2.0, (y1 + y2) / 2.0)
            };
            (
                Connector::Curved {
                    extension,
                    curve,
                    stroke_width: height,
                },
                anchor,
            )
        };

        FlowGeometry {
            origin_x,
            y1,
            y2,
            connector,
            label: Label::percent(percent, label_anchor, height, self.label),
            gradient_id: format!("funnel-gradient-{}", flow_id),
        }
    }

    /// Shapes a drop of thickness `height` hanging off the right edge of a
    /// bucket whose bottom-right corner is at `(edge_x, bucket_bottom)`.
    pub fn drop(&self, edge_x: f64, bucket_bottom: f64, height: f64, percent: f64) -> DropGeometry {
        let r = self.drop_radius;
        let anchor = Point::new(edge_x, bucket_bottom - height + r);

        let connector = if r <= STRAIGHT_TOLERANCE {
            Connector::Straight {
                rect: Rect::new(0.0, 0.0, 0.0, 0.0),
            }
        } else {
            Connector::Curved {
                extension: None,
                curve: CubicBezier::from_quadratic(
                    Point::new(0.0, 0.0),
                    Point::new(r, 0.0),
                    Point::new(r, r),
                ),
                stroke_width: 2.0 * r,
            }
        };

        let body = Rect::new(0.0, r, 2.0 * r, height);
        let fade = Rect::new(0.0, height + r, 2.0 * r, self.drop_padding);
        let title_anchor = Point::new(DROP_TITLE_INSET, height + self.drop_padding + 2.0 * r);
        let label = Label::percent(percent, Point::new(r, r + height / 2.0), height, self.label);

        DropGeometry {
            anchor,
            connector,
            body,
            fade,
            fade_gradient_id: DROP_GRADIENT_ID.to_string(),
            title_anchor,
            label,
        }
    }

    fn radius(&self, y1: f64, y2: f64) -> f64 {
        match self.curvature {
            CurvatureStyle::Constant { radius } => radius,
            CurvatureStyle::VerticalSpan { base } => {
                let ratio = if self.content_height > 0.0 {
                    ((y2 - y1).abs() / self.content_height).min(1.0)
                } else {
                    0.0
                };
                (base * (1.0 - ratio)).max(MIN_SPAN_RADIUS)
            }
        }
    }
}
