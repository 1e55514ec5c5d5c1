use crate::error::LayoutError;
use crate::funnel::{BucketSpec, DropSpec, FlowSpec, FunnelSpec, ValueResolver};
use ahash::AHashMap;

/// A funnel whose magnitudes have been resolved and whose references have
/// been checked. `None` magnitudes are filtered out by the layout stages.
pub(super) struct ResolvedFunnel<'a> {
    pub(super) steps: Vec<Vec<ResolvedBucket<'a>>>,
}

pub(super) struct ResolvedBucket<'a> {
    pub(super) step: usize,
    pub(super) spec: &'a BucketSpec,
    pub(super) value: Option<f64>,
    pub(super) drop: Option<(&'a DropSpec, f64)>,
    pub(super) flows: Vec<(&'a FlowSpec, Option<f64>)>,
}

impl<'a> ResolvedFunnel<'a> {
    /// Validates the funnel and resolves every magnitude once.
    pub(super) fn new(funnel: &'a FunnelSpec, resolver: ValueResolver) -> Result<Self, LayoutError> {
        if funnel.steps.is_empty() {
            return Err(LayoutError::EmptyFunnel);
        }

        let mut step_of: AHashMap<&str, usize> = AHashMap::new();
        for (step_idx, bucket) in funnel.buckets() {
            if let Some(first_step) = step_of.insert(bucket.id.as_str(), step_idx) {
                return Err(LayoutError::DuplicateBucketId {
                    id: bucket.id.clone(),
                    first_step,
                    second_step: step_idx,
                });
            }
        }

        let steps = funnel
            .steps
            .iter()
            .enumerate()
            .map(|(step_idx, step)| {
                step.buckets
                    .iter()
                    .map(|bucket| Self::resolve_bucket(step_idx, bucket, &step_of, resolver))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { steps })
    }

    fn resolve_bucket(
        step_idx: usize,
        bucket: &'a BucketSpec,
        step_of: &AHashMap<&str, usize>,
        resolver: ValueResolver,
    ) -> Result<ResolvedBucket<'a>, LayoutError> {
        let value = resolver.resolve(bucket)?;

        let drop = match &bucket.drop {
            Some(drop) => resolver.resolve(drop)?.map(|v| (drop, v)),
            None => None,
        };

        let flows = bucket
            .flows
            .iter()
            .map(|flow| {
                let source_step = step_of.get(flow.source.as_str()).copied().ok_or_else(|| {
                    LayoutError::UnknownFlowSource {
                        source_id: flow.source.clone(),
                        target: bucket.id.clone(),
                    }
                })?;
                if source_step >= step_idx {
                    return Err(LayoutError::BackwardFlow {
                        source_id: flow.source.clone(),
                        target: bucket.id.clone(),
                    });
                }
                Ok((flow, resolver.resolve(flow)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ResolvedBucket {
            step: step_idx,
            spec: bucket,
            value,
            drop,
            flows,
        })
    }

    pub(super) fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Buckets that survived magnitude filtering, step by step in draw order.
    pub(super) fn surviving(&self) -> impl Iterator<Item = (&ResolvedBucket<'a>, f64)> {
        self.steps
            .iter()
            .flatten()
            .filter_map(|bucket| bucket.value.map(|value| (bucket, value)))
    }
}
