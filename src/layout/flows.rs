use super::resolved::ResolvedFunnel;
use crate::scene::LaidOutBucket;
use ahash::AHashMap;

/// Per-bucket accumulators for one layout pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(super) struct EdgeOffsets {
    /// Space on the right edge already used by departing flows.
    pub(super) from: f64,
    /// Space on the left edge already used by arriving flows.
    pub(super) to: f64,
}

/// A flow placed on its two bucket edges, before any curve is computed.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct FlowBand {
    pub(super) id: String,
    pub(super) from: usize,
    pub(super) to: usize,
    pub(super) value: f64,
    pub(super) height: f64,
    pub(super) from_offset: f64,
    pub(super) to_offset: f64,
    pub(super) percent: f64,
}

/// Places every surviving flow in declaration order, stacking flows that
/// share an edge. The returned side table holds the final offsets.
pub(super) fn layout_flows(
    funnel: &ResolvedFunnel<'_>,
    buckets: &[LaidOutBucket],
    index: &AHashMap<&str, usize>,
    y_scale: f64,
) -> (Vec<FlowBand>, AHashMap<usize, EdgeOffsets>) {
    let mut offsets: AHashMap<usize, EdgeOffsets> = AHashMap::new();
    let mut bands = Vec::new();

    for (bucket, _) in funnel.surviving() {
        let Some(&to) = index.get(bucket.spec.id.as_str()) else {
            continue;
        };

        for (flow, value) in &bucket.flows {
            let Some(value) = *value else {
                continue;
            };
            let Some(&from) = index.get(flow.source.as_str()) else {
                tracing::warn!(
                    source = %flow.source,
                    target = %bucket.spec.id,
                    "flow skipped: its source bucket has no magnitude"
                );
                continue;
            };

            let height = value * y_scale;
            let from_offset = offsets.entry(from).or_default().from;
            let to_offset = offsets.entry(to).or_default().to;
            offsets.entry(from).or_default().from += height;
            offsets.entry(to).or_default().to += height;

            let source = &buckets[from];
            let id = format!("{}-{}", source.id, bucket.spec.id);
            tracing::trace!(%id, height, from_offset, to_offset, "flow placed");

            bands.push(FlowBand {
                id,
                from,
                to,
                value,
                height,
                from_offset,
                to_offset,
                percent: value / source.value,
            });
        }
    }

    (bands, offsets)
}
