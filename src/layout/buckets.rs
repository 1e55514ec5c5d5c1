use super::resolved::ResolvedFunnel;
use crate::scene::LaidOutBucket;
use ahash::AHashMap;

/// Column x of a step: columns are two bucket widths apart, leaving one
/// bucket width for the flows in between.
pub(super) fn column_x(step_idx: usize, bucket_width: f64) -> f64 {
    2.0 * step_idx as f64 * bucket_width
}

/// Stacks the surviving buckets of every step top to bottom.
pub(super) fn layout_buckets(
    funnel: &ResolvedFunnel<'_>,
    y_scale: f64,
    bucket_width: f64,
    bucket_margin: f64,
) -> Vec<LaidOutBucket> {
    let mut buckets: Vec<LaidOutBucket> = Vec::new();
    let mut step_cursor: Option<(usize, f64)> = None;

    for (bucket, value) in funnel.surviving() {
        let y = match step_cursor {
            Some((step, next_y)) if step == bucket.step => next_y,
            _ => 0.0,
        };
        let height = value * y_scale;
        step_cursor = Some((bucket.step, y + height + bucket_margin));

        buckets.push(LaidOutBucket {
            index: buckets.len(),
            step: bucket.step,
            id: bucket.spec.id.clone(),
            title: bucket.spec.title.clone(),
            value,
            color: bucket.spec.color.clone(),
            x: column_x(bucket.step, bucket_width),
            y,
            height,
            from_offset: 0.0,
            to_offset: 0.0,
        });
    }

    buckets
}

/// Maps bucket ids to their position in the laid-out bucket list.
pub(super) fn index_by_id(buckets: &[LaidOutBucket]) -> AHashMap<&str, usize> {
    buckets
        .iter()
        .map(|b| (b.id.as_str(), b.index))
        .collect()
}
