//! Layout configuration.
//!
//! Every field has a default, so partial JSON documents are accepted. The
//! defaults reproduce the classic funnel look: a 50px header, 20px between
//! buckets, drops counted towards the step volume and a constant curvature.

use crate::error::{LayoutError, SpecError};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    #[serde(default = "default_header_height")]
    pub header_height: f64,

    #[serde(default = "default_bucket_margin")]
    pub bucket_margin: f64,

    /// Passed through to the renderer untouched.
    #[serde(default = "default_border_radius")]
    pub border_radius: f64,

    #[serde(default)]
    pub interactive: bool,

    #[serde(default)]
    pub animate: bool,

    /// Whether a step's volume for scaling includes the drops of its buckets.
    #[serde(default = "default_true")]
    pub include_drops_in_scale: bool,

    /// Reserve the inter-bucket margins of every step before scaling.
    #[serde(default)]
    pub fit_margins: bool,

    /// Whether entity lists count as magnitudes.
    #[serde(default = "default_true")]
    pub resolve_entities: bool,

    #[serde(default)]
    pub curvature: CurvatureStyle,

    #[serde(default = "default_drop_radius")]
    pub drop_radius: f64,

    #[serde(default = "default_drop_padding")]
    pub drop_padding: f64,

    #[serde(default)]
    pub label: LabelStyle,

    #[serde(default)]
    pub drop_colors: DropColors,
}

/// How far the control points of a flow curve sit from its endpoints.
///
/// The control points are placed `span / radius` away from each end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum CurvatureStyle {
    Constant { radius: f64 },
    /// `radius = max(2, base * (1 - dy / content_height))`: steep flows bend
    /// around their midpoint, shallow ones hug their endpoints.
    VerticalSpan { base: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    /// Font size per pixel of flow thickness.
    #[serde(default = "default_label_scale")]
    pub scale: f64,
    #[serde(default = "default_min_font")]
    pub min_font_size: f64,
    #[serde(default = "default_max_font")]
    pub max_font_size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropColors {
    #[serde(default = "default_drop_start")]
    pub start: String,
    #[serde(default = "default_drop_stop")]
    pub stop: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            header_height: default_header_height(),
            bucket_margin: default_bucket_margin(),
            border_radius: default_border_radius(),
            interactive: false,
            animate: false,
            include_drops_in_scale: true,
            fit_margins: false,
            resolve_entities: true,
            curvature: CurvatureStyle::default(),
            drop_radius: default_drop_radius(),
            drop_padding: default_drop_padding(),
            label: LabelStyle::default(),
            drop_colors: DropColors::default(),
        }
    }
}

impl Default for CurvatureStyle {
    fn default() -> Self {
        CurvatureStyle::Constant { radius: 5.0 }
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            scale: default_label_scale(),
            min_font_size: default_min_font(),
            max_font_size: default_max_font(),
        }
    }
}

impl Default for DropColors {
    fn default() -> Self {
        Self {
            start: default_drop_start(),
            stop: default_drop_stop(),
        }
    }
}

fn default_header_height() -> f64 {
    50.0
}

fn default_bucket_margin() -> f64 {
    20.0
}

fn default_border_radius() -> f64 {
    3.0
}

fn default_true() -> bool {
    true
}

fn default_drop_radius() -> f64 {
    15.0
}

fn default_drop_padding() -> f64 {
    10.0
}

fn default_label_scale() -> f64 {
    0.4
}

fn default_min_font() -> f64 {
    10.0
}

fn default_max_font() -> f64 {
    16.0
}

fn default_drop_start() -> String {
    "#d9d9d9".to_string()
}

fn default_drop_stop() -> String {
    "rgba(217, 217, 217, 0)".to_string()
}

impl LayoutOptions {
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        serde_json::from_str(json).map_err(|e| SpecError::Json(e.to_string()))
    }

    pub fn from_file(path: &str) -> Result<Self, SpecError> {
        let content = fs::read_to_string(path).map_err(|e| SpecError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// Rejects negative or non-finite sizes and unusable curvature settings.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let lengths = [
            ("header_height", self.header_height),
            ("bucket_margin", self.bucket_margin),
            ("border_radius", self.border_radius),
            ("drop_radius", self.drop_radius),
            ("drop_padding", self.drop_padding),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidOptions(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        match self.curvature {
            CurvatureStyle::Constant { radius } if !(radius.is_finite() && radius >= 1.0) => {
                return Err(LayoutError::InvalidOptions(format!(
                    "curvature radius must be at least 1, got {}",
                    radius
                )));
            }
            CurvatureStyle::VerticalSpan { base } if !(base.is_finite() && base > 0.0) => {
                return Err(LayoutError::InvalidOptions(format!(
                    "curvature base must be positive, got {}",
                    base
                )));
            }
            _ => {}
        }

        let label = self.label;
        if !(label.scale.is_finite() && label.scale >= 0.0)
            || !(label.min_font_size.is_finite() && label.min_font_size > 0.0)
            || !(label.max_font_size.is_finite() && label.max_font_size >= label.min_font_size)
        {
            return Err(LayoutError::InvalidOptions(format!(
                "label style is inconsistent: {:?}",
                label
            )));
        }

        Ok(())
    }
}
