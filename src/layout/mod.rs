use crate::error::LayoutError;
use ahash::AHashSet;
use crate::funnel::{FunnelSpec, ValueResolver};
use crate::geometry::{CurveContext, Gradient};
use crate::options::{CurvatureStyle, DropColors, LabelStyle, LayoutOptions};
use crate::scene::{Flow, FunnelLayout, LaidOutDrop, SkipReason, StyleSettings};
use crate::surface::{Dimensions, Surface};

mod buckets;
mod drops;
mod flows;
mod resolved;
mod scale;
mod steps;

use resolved::ResolvedFunnel;
use scale::ScaleParams;

/// Turns funnel definitions into positioned geometry.
///
/// An engine holds only its options; every pass works on fresh state, so a
/// single engine can lay out many funnels, from many threads.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    options: LayoutOptions,
}

pub struct LayoutEngineBuilder {
    options: LayoutOptions,
}

impl LayoutEngineBuilder {
    pub fn new() -> Self {
        Self {
            options: LayoutOptions::default(),
        }
    }
    pub fn from_options(options: LayoutOptions) -> Self {
        Self { options }
    }
    pub fn with_header_height(mut self, header_height: f64) -> Self {
        self.options.header_height = header_height;
        self
    }
    pub fn with_bucket_margin(mut self, bucket_margin: f64) -> Self {
        self.options.bucket_margin = bucket_margin;
        self
    }
    pub fn with_border_radius(mut self, border_radius: f64) -> Self {
        self.options.border_radius = border_radius;
        self
    }
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.options.interactive = interactive;
        self
    }
    pub fn with_animate(mut self, animate: bool) -> Self {
        self.options.animate = animate;
        self
    }
    pub fn with_drops_in_scale(mut self, include: bool) -> Self {
        self.options.include_drops_in_scale = include;
        self
    }
    pub fn with_fit_margins(mut self, fit: bool) -> Self {
        self.options.fit_margins = fit;
        self
    }
    pub fn with_entity_resolution(mut self, enabled: bool) -> Self {
        self.options.resolve_entities = enabled;
        self
    }
    pub fn with_curvature(mut self, curvature: CurvatureStyle) -> Self {
        self.options.curvature = curvature;
        self
    }
    pub fn with_drop_shape(mut self, radius: f64, padding: f64) -> Self {
        self.options.drop_radius = radius;
        self.options.drop_padding = padding;
        self
    }
    pub fn with_label_style(mut self, label: LabelStyle) -> Self {
        self.options.label = label;
        self
    }
    pub fn with_drop_colors(mut self, start: &str, stop: &str) -> Self {
        self.options.drop_colors = DropColors {
            start: start.to_string(),
            stop: stop.to_string(),
        };
        self
    }
    pub fn build(self) -> Result<LayoutEngine, LayoutError> {
        LayoutEngine::new(self.options)
    }
}

impl Default for LayoutEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            options: LayoutOptions::default(),
        }
    }
}

impl LayoutEngine {
    pub fn builder() -> LayoutEngineBuilder {
        LayoutEngineBuilder::new()
    }

    pub fn new(options: LayoutOptions) -> Result<Self, LayoutError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Measures `surface` once, then lays the funnel out on it.
    pub fn layout_on(
        &self,
        funnel: &FunnelSpec,
        surface: &dyn Surface,
    ) -> Result<FunnelLayout, LayoutError> {
        self.layout(funnel, surface.measure())
    }

    /// Runs one complete layout pass.
    ///
    /// Configuration errors are reported even when the surface is not
    /// measured yet. Degenerate inputs (unmeasured surface, no room below the
    /// header, an all-zero funnel) yield a layout without geometry whose
    /// `skipped` field says why.
    pub fn layout(
        &self,
        funnel: &FunnelSpec,
        dimensions: Dimensions,
    ) -> Result<FunnelLayout, LayoutError> {
        let opts = &self.options;
        let resolved = ResolvedFunnel::new(funnel, ValueResolver::new(opts.resolve_entities))?;

        let style = StyleSettings {
            border_radius: opts.border_radius,
            bucket_margin: opts.bucket_margin,
            interactive: opts.interactive,
            animate: opts.animate,
        };
        let skip = |reason: SkipReason| -> Result<FunnelLayout, LayoutError> {
            tracing::debug!(?reason, ?dimensions, "layout pass skipped");
            Ok(FunnelLayout::skipped(
                dimensions,
                opts.header_height,
                style,
                reason,
            ))
        };

        if !dimensions.is_measured() {
            return skip(SkipReason::Unmeasured);
        }

        let content_height = dimensions.height - opts.header_height;
        let y_scale = match scale::y_scale(
            &resolved,
            ScaleParams {
                content_height,
                bucket_margin: opts.bucket_margin,
                include_drops: opts.include_drops_in_scale,
                fit_margins: opts.fit_margins,
            },
        ) {
            Ok(y_scale) => y_scale,
            Err(reason) => return skip(reason),
        };

        let bucket_width = dimensions.width / (2 * resolved.step_count() - 1) as f64;

        let mut laid_out = buckets::layout_buckets(&resolved, y_scale, bucket_width, opts.bucket_margin);
        let index = buckets::index_by_id(&laid_out);
        let (bands, offsets) = flows::layout_flows(&resolved, &laid_out, &index, y_scale);
        let drop_bands = drops::layout_drops(&resolved, &laid_out, &index, y_scale);

        for (bucket_idx, edge) in offsets {
            laid_out[bucket_idx].from_offset = edge.from;
            laid_out[bucket_idx].to_offset = edge.to;
        }

        let steps = steps::layout_steps(funnel, bucket_width, content_height, opts.header_height);
        let curves = CurveContext::new(opts, bucket_width, content_height);

        // Repeated flows between one pair share an id, and so a gradient.
        let mut gradients = Vec::with_capacity(bands.len());
        let mut gradient_ids: AHashSet<String> = AHashSet::new();
        let flows: Vec<Flow> = bands
            .into_iter()
            .map(|band| {
                let from = &laid_out[band.from];
                let to = &laid_out[band.to];
                let start = (
                    from.x + bucket_width,
                    from.y + band.from_offset + band.height / 2.0,
                );
                let end = (to.x, to.y + band.to_offset + band.height / 2.0);
                let geometry = curves.flow(&band.id, start, end, band.height, band.percent);

                if gradient_ids.insert(band.id.clone()) {
                    gradients.push(Gradient::for_flow(
                        &band.id,
                        &from.color,
                        &to.color,
                        bucket_width,
                    ));
                }

                Flow {
                    id: band.id,
                    from: band.from,
                    to: band.to,
                    value: band.value,
                    height: band.height,
                    from_offset: band.from_offset,
                    to_offset: band.to_offset,
                    percent: band.percent,
                    geometry,
                }
            })
            .collect();

        let drops: Vec<LaidOutDrop> = drop_bands
            .into_iter()
            .map(|band| {
                let bucket = &laid_out[band.from];
                let geometry = curves.drop(
                    bucket.x + bucket_width,
                    bucket.y + bucket.height,
                    band.height,
                    band.percent,
                );
                LaidOutDrop {
                    from: band.from,
                    title: band.title,
                    value: band.value,
                    height: band.height,
                    percent: band.percent,
                    geometry,
                }
            })
            .collect();

        tracing::debug!(
            y_scale,
            bucket_width,
            buckets = laid_out.len(),
            flows = flows.len(),
            drops = drops.len(),
            "layout pass complete"
        );

        Ok(FunnelLayout {
            dimensions,
            bucket_width,
            header_height: opts.header_height,
            content_height,
            y_scale,
            style,
            steps,
            buckets: laid_out,
            flows,
            drops,
            gradients,
            drop_gradient: Some(Gradient::for_drops(
                &opts.drop_colors.start,
                &opts.drop_colors.stop,
            )),
            skipped: None,
        })
    }
}
