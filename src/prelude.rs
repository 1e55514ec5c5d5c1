//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the routo crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use routo::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let funnel = FunnelSpec::from_file("path/to/funnel.json")?;
//! let options = LayoutOptions::from_file("path/to/options.json")?;
//!
//! let engine = LayoutEngine::new(options)?;
//! let layout = engine.layout(&funnel, Dimensions::new(1200.0, 600.0))?;
//! println!("{}", describe(&layout));
//! # Ok(())
//! # }
//! ```

// Layout engine and configuration
pub use crate::layout::{LayoutEngine, LayoutEngineBuilder};
pub use crate::options::{CurvatureStyle, LabelStyle, LayoutOptions};
pub use crate::surface::{Dimensions, Surface};

// Input model
pub use crate::funnel::{BucketSpec, DropSpec, FlowSpec, FunnelSpec, Magnitude, StepSpec};

// Output scene
pub use crate::geometry::{Connector, Gradient, Label, Point, Rect};
pub use crate::scene::visualizer::describe;
pub use crate::scene::{
    Flow, FunnelLayout, LaidOutBucket, LaidOutDrop, LaidOutStep, SkipReason, StyleSettings,
};

// Error types
pub use crate::error::{ArtifactError, LayoutError, SpecError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
