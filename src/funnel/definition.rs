use super::magnitude::Magnitude;
use crate::error::SpecError;
use serde::{Deserialize, Serialize};
use std::fs;

/// The complete, canonical definition of a funnel, ready for layout.
///
/// Steps are drawn left to right in the order they appear here.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FunnelSpec {
    pub steps: Vec<StepSpec>,
}

/// One column of the funnel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepSpec {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub buckets: Vec<BucketSpec>,
}

/// A stock of items at one step. Buckets are stacked top to bottom in array order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketSpec {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub value: Option<Magnitude>,
    #[serde(default)]
    pub entities: Option<Vec<serde_json::Value>>,
    #[serde(default = "default_color")]
    pub color: String,
    /// Inbound flows terminating at this bucket.
    #[serde(default)]
    pub flows: Vec<FlowSpec>,
    #[serde(default)]
    pub drop: Option<DropSpec>,
}

/// A transfer into the owning bucket from `source`, a bucket in an earlier step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowSpec {
    pub source: String,
    #[serde(default)]
    pub value: Option<Magnitude>,
    #[serde(default)]
    pub entities: Option<Vec<serde_json::Value>>,
}

/// Attrition leaving the owning bucket without flowing onward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropSpec {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub value: Option<Magnitude>,
    #[serde(default)]
    pub entities: Option<Vec<serde_json::Value>>,
}

fn default_color() -> String {
    "currentColor".to_string()
}

/// Accepts both the bare array format and `{ "steps": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawFunnel {
    Steps(Vec<StepSpec>),
    Wrapped { steps: Vec<StepSpec> },
}

impl<'de> Deserialize<'de> for FunnelSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let steps = match RawFunnel::deserialize(deserializer)? {
            RawFunnel::Steps(steps) | RawFunnel::Wrapped { steps } => steps,
        };
        Ok(Self { steps })
    }
}

impl FunnelSpec {
    pub fn new(steps: Vec<StepSpec>) -> Self {
        Self { steps }
    }

    /// Parses a funnel from JSON.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        serde_json::from_str(json).map_err(|e| SpecError::Json(e.to_string()))
    }

    /// Loads a funnel definition from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, SpecError> {
        let content = fs::read_to_string(path).map_err(|e| SpecError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// Iterates over every bucket together with the index of its step.
    pub fn buckets(&self) -> impl Iterator<Item = (usize, &BucketSpec)> {
        self.steps
            .iter()
            .enumerate()
            .flat_map(|(step_idx, step)| step.buckets.iter().map(move |b| (step_idx, b)))
    }
}

impl StepSpec {
    pub fn new(title: &str, buckets: Vec<BucketSpec>) -> Self {
        Self {
            title: title.to_string(),
            buckets,
        }
    }
}

impl BucketSpec {
    /// A bucket with an explicit numeric value and no flows or drop.
    pub fn new(id: &str, title: &str, value: f64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            value: Some(Magnitude::Number(value)),
            entities: None,
            color: default_color(),
            flows: Vec::new(),
            drop: None,
        }
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = color.to_string();
        self
    }

    pub fn with_flow(mut self, source: &str, value: f64) -> Self {
        self.flows.push(FlowSpec::new(source, value));
        self
    }

    pub fn with_drop(mut self, title: &str, value: f64) -> Self {
        self.drop = Some(DropSpec::new(title, value));
        self
    }

    pub fn with_entities(mut self, entities: Vec<serde_json::Value>) -> Self {
        self.value = None;
        self.entities = Some(entities);
        self
    }
}

impl FlowSpec {
    pub fn new(source: &str, value: f64) -> Self {
        Self {
            source: source.to_string(),
            value: Some(Magnitude::Number(value)),
            entities: None,
        }
    }
}

impl DropSpec {
    pub fn new(title: &str, value: f64) -> Self {
        Self {
            title: title.to_string(),
            value: Some(Magnitude::Number(value)),
            entities: None,
        }
    }
}
