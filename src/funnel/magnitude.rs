use super::definition::{BucketSpec, DropSpec, FlowSpec};
use crate::error::LayoutError;
use serde::{Deserialize, Serialize};

/// A declared magnitude: either an explicit number or a list of entities
/// whose length is the magnitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Magnitude {
    Number(f64),
    Entities(Vec<serde_json::Value>),
}

/// Anything that carries a declared magnitude.
pub trait Measured {
    fn declared_value(&self) -> Option<&Magnitude>;
    fn declared_entities(&self) -> Option<&[serde_json::Value]>;
    /// Human-readable label used in error messages.
    fn describe(&self) -> String;
}

impl Measured for BucketSpec {
    fn declared_value(&self) -> Option<&Magnitude> {
        self.value.as_ref()
    }
    fn declared_entities(&self) -> Option<&[serde_json::Value]> {
        self.entities.as_deref()
    }
    fn describe(&self) -> String {
        format!("Bucket '{}'", self.id)
    }
}

impl Measured for FlowSpec {
    fn declared_value(&self) -> Option<&Magnitude> {
        self.value.as_ref()
    }
    fn declared_entities(&self) -> Option<&[serde_json::Value]> {
        self.entities.as_deref()
    }
    fn describe(&self) -> String {
        format!("Flow from '{}'", self.source)
    }
}

impl Measured for DropSpec {
    fn declared_value(&self) -> Option<&Magnitude> {
        self.value.as_ref()
    }
    fn declared_entities(&self) -> Option<&[serde_json::Value]> {
        self.entities.as_deref()
    }
    fn describe(&self) -> String {
        format!("Drop '{}'", self.title)
    }
}

/// Turns declared magnitudes into numbers.
///
/// `Ok(None)` means the item is absent or zero and must be left out of the
/// layout entirely.
#[derive(Debug, Clone, Copy)]
pub struct ValueResolver {
    resolve_entities: bool,
}

impl ValueResolver {
    pub fn new(resolve_entities: bool) -> Self {
        Self { resolve_entities }
    }

    pub fn resolve<M: Measured + ?Sized>(&self, item: &M) -> Result<Option<f64>, LayoutError> {
        let raw = match item.declared_value() {
            Some(Magnitude::Number(n)) => Some(*n),
            Some(Magnitude::Entities(list)) if self.resolve_entities => Some(list.len() as f64),
            _ if self.resolve_entities => item.declared_entities().map(|list| list.len() as f64),
            _ => None,
        };

        match raw {
            Some(value) if !value.is_finite() || value < 0.0 => Err(LayoutError::InvalidMagnitude {
                item: item.describe(),
                value,
            }),
            Some(value) if value > 0.0 => Ok(Some(value)),
            _ => Ok(None),
        }
    }
}

impl Default for ValueResolver {
    fn default() -> Self {
        Self::new(true)
    }
}
