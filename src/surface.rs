use serde::{Deserialize, Serialize};

/// Size of the drawing area in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `false` for a container that has not been measured yet (zero-sized,
    /// negative or non-finite).
    pub fn is_measured(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// The drawing-area measurement collaborator.
///
/// The engine queries a surface exactly once per layout pass, before any
/// computation starts.
pub trait Surface {
    fn measure(&self) -> Dimensions;
}

/// Already-known dimensions act as a surface of that size.
impl Surface for Dimensions {
    fn measure(&self) -> Dimensions {
        *self
    }
}
