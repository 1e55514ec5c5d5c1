use super::resolved::ResolvedFunnel;
use crate::scene::LaidOutBucket;
use ahash::AHashMap;

#[derive(Debug, Clone, PartialEq)]
pub(super) struct DropBand {
    pub(super) from: usize,
    pub(super) title: String,
    pub(super) value: f64,
    pub(super) height: f64,
    pub(super) percent: f64,
}

/// Sizes the drop of every surviving bucket. Drops never touch the flow
/// offset table.
pub(super) fn layout_drops(
    funnel: &ResolvedFunnel<'_>,
    buckets: &[LaidOutBucket],
    index: &AHashMap<&str, usize>,
    y_scale: f64,
) -> Vec<DropBand> {
    funnel
        .surviving()
        .filter_map(|(bucket, _)| {
            let (drop, value) = bucket.drop?;
            let from = *index.get(bucket.spec.id.as_str())?;
            Some(DropBand {
                from,
                title: drop.title.clone(),
                value,
                height: value * y_scale,
                percent: value / buckets[from].value,
            })
        })
        .collect()
}
