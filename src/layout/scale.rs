use super::resolved::ResolvedFunnel;
use crate::scene::SkipReason;

/// Inputs of the scale computation that come from the options.
#[derive(Debug, Clone, Copy)]
pub(super) struct ScaleParams {
    pub(super) content_height: f64,
    pub(super) bucket_margin: f64,
    pub(super) include_drops: bool,
    pub(super) fit_margins: bool,
}

/// Resolved volume of every step, in step order.
pub(super) fn step_sums(funnel: &ResolvedFunnel<'_>, include_drops: bool) -> Vec<f64> {
    funnel
        .steps
        .iter()
        .map(|buckets| {
            buckets
                .iter()
                .filter_map(|b| {
                    let value = b.value?;
                    let drop = match b.drop {
                        Some((_, drop)) if include_drops => drop,
                        _ => 0.0,
                    };
                    Some(value + drop)
                })
                .sum::<f64>()
        })
        .collect()
}

/// Computes the global pixels-per-unit factor.
///
/// Returns the reason to skip the pass when the scale would be undefined or
/// non-positive.
pub(super) fn y_scale(funnel: &ResolvedFunnel<'_>, params: ScaleParams) -> Result<f64, SkipReason> {
    if params.content_height <= 0.0 {
        return Err(SkipReason::NoContentHeight);
    }

    let sums = step_sums(funnel, params.include_drops);
    let max_step_sum = sums.iter().copied().fold(0.0_f64, f64::max);
    if max_step_sum <= 0.0 {
        return Err(SkipReason::ZeroMagnitude);
    }
    if !max_step_sum.is_finite() {
        return Err(SkipReason::ScaleOverflow);
    }

    if !params.fit_margins {
        let scale = params.content_height / max_step_sum;
        return if scale > 0.0 && scale.is_finite() {
            Ok(scale)
        } else {
            Err(SkipReason::ScaleOverflow)
        };
    }

    let scale = funnel
        .steps
        .iter()
        .zip(&sums)
        .filter(|(_, sum)| **sum > 0.0)
        .map(|(buckets, sum)| {
            let gaps = buckets.iter().filter(|b| b.value.is_some()).count().saturating_sub(1);
            (params.content_height - params.bucket_margin * gaps as f64) / sum
        })
        .fold(f64::INFINITY, f64::min);

    if scale > 0.0 && scale.is_finite() {
        Ok(scale)
    } else {
        Err(SkipReason::NoContentHeight)
    }
}
