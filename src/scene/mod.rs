//! The positioned geometry tree produced by a layout pass.
//!
//! Everything here is plain data, ready to be handed to a renderer or
//! persisted as an artifact. Flows and drops refer to buckets by their index
//! in [`FunnelLayout::buckets`].

pub mod artifact;
pub mod visualizer;

use crate::geometry::{DropGeometry, FlowGeometry, Gradient, Point};
use crate::surface::Dimensions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaidOutBucket {
    pub index: usize,
    pub step: usize,
    pub id: String,
    pub title: String,
    /// Resolved magnitude.
    pub value: f64,
    pub color: String,
    pub x: f64,
    pub y: f64,
    pub height: f64,
    /// Edge space claimed by departing flows at the end of the pass.
    pub from_offset: f64,
    /// Edge space claimed by arriving flows at the end of the pass.
    pub to_offset: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaidOutStep {
    pub index: usize,
    pub title: String,
    pub x: f64,
    pub width: f64,
    pub height: f64,
    /// Center of the column header, above the content origin.
    pub label_anchor: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    /// `"{source}-{target}"`.
    pub id: String,
    pub from: usize,
    pub to: usize,
    pub value: f64,
    pub height: f64,
    pub from_offset: f64,
    pub to_offset: f64,
    /// Share of the source bucket's value.
    pub percent: f64,
    pub geometry: FlowGeometry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaidOutDrop {
    pub from: usize,
    pub title: String,
    pub value: f64,
    pub height: f64,
    /// Share of the owning bucket's value.
    pub percent: f64,
    pub geometry: DropGeometry,
}

/// Renderer settings carried through the pass unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleSettings {
    pub border_radius: f64,
    pub bucket_margin: f64,
    pub interactive: bool,
    pub animate: bool,
}

/// Why a pass produced no geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The drawing surface has no usable size yet.
    Unmeasured,
    /// The header (and reserved margins) leave no room for content.
    NoContentHeight,
    /// Every step sums to zero, so there is nothing to scale.
    ZeroMagnitude,
    /// The step volumes are too large to be represented, so the scale
    /// would collapse to zero.
    ScaleOverflow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelLayout {
    pub dimensions: Dimensions,
    pub bucket_width: f64,
    pub header_height: f64,
    pub content_height: f64,
    /// Pixels per unit of magnitude, shared by every step.
    pub y_scale: f64,
    pub style: StyleSettings,
    pub steps: Vec<LaidOutStep>,
    pub buckets: Vec<LaidOutBucket>,
    pub flows: Vec<Flow>,
    pub drops: Vec<LaidOutDrop>,
    pub gradients: Vec<Gradient>,
    pub drop_gradient: Option<Gradient>,
    pub skipped: Option<SkipReason>,
}

impl FunnelLayout {
    /// A layout without geometry.
    pub fn skipped(
        dimensions: Dimensions,
        header_height: f64,
        style: StyleSettings,
        reason: SkipReason,
    ) -> Self {
        Self {
            dimensions,
            bucket_width: 0.0,
            header_height,
            content_height: 0.0,
            y_scale: 0.0,
            style,
            steps: Vec::new(),
            buckets: Vec::new(),
            flows: Vec::new(),
            drops: Vec::new(),
            gradients: Vec::new(),
            drop_gradient: None,
            skipped: Some(reason),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.skipped.is_some()
    }

    pub fn bucket(&self, index: usize) -> Option<&LaidOutBucket> {
        self.buckets.get(index)
    }

    pub fn bucket_by_id(&self, id: &str) -> Option<&LaidOutBucket> {
        self.buckets.iter().find(|b| b.id == id)
    }

    pub fn flow_by_id(&self, id: &str) -> Option<&Flow> {
        self.flows.iter().find(|f| f.id == id)
    }

    /// Flows leaving the bucket at `index`, in layout order.
    pub fn flows_from(&self, index: usize) -> impl Iterator<Item = &Flow> {
        self.flows.iter().filter(move |f| f.from == index)
    }

    /// Flows arriving at the bucket at `index`, in layout order.
    pub fn flows_into(&self, index: usize) -> impl Iterator<Item = &Flow> {
        self.flows.iter().filter(move |f| f.to == index)
    }

    pub fn drop_of(&self, index: usize) -> Option<&LaidOutDrop> {
        self.drops.iter().find(|d| d.from == index)
    }

    pub fn gradient_for(&self, flow: &Flow) -> Option<&Gradient> {
        self.gradients
            .iter()
            .find(|g| g.flow_id.as_deref() == Some(flow.id.as_str()))
    }
}
