use super::buckets::column_x;
use crate::funnel::FunnelSpec;
use crate::geometry::Point;
use crate::scene::LaidOutStep;

/// Positions every step column and its header label.
pub(super) fn layout_steps(
    funnel: &FunnelSpec,
    bucket_width: f64,
    content_height: f64,
    header_height: f64,
) -> Vec<LaidOutStep> {
    funnel
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let x = column_x(index, bucket_width);
            LaidOutStep {
                index,
                title: step.title.clone(),
                x,
                width: bucket_width,
                height: content_height,
                label_anchor: Point::new(x + bucket_width / 2.0, -header_height / 2.0),
            }
        })
        .collect()
}
