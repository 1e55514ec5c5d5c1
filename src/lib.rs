//! # Routo - Funnel Diagram Layout Engine
//!
//! **Routo** turns an abstract funnel description (steps, buckets, flows
//! between buckets and drops out of them) into a fully positioned scene:
//! coordinates, dimensions, curve control points, percentages and gradient
//! endpoints. It draws nothing itself; the resulting [`scene::FunnelLayout`]
//! is plain serialisable data for whatever renderer sits on top.
//!
//! ## Core Workflow
//!
//! 1.  **Describe the funnel**: build a [`funnel::FunnelSpec`] in code, or
//!     parse one from JSON with [`funnel::FunnelSpec::from_json`].
//! 2.  **Configure the engine**: use [`layout::LayoutEngine::builder`] or
//!     deserialise [`options::LayoutOptions`].
//! 3.  **Measure and lay out**: pass the drawing area's [`surface::Dimensions`]
//!     (or anything implementing [`surface::Surface`]) to
//!     [`layout::LayoutEngine::layout`].
//! 4.  **Render**: walk the buckets, flows, drops, steps and gradients of the
//!     layout, or persist it as an artifact.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use routo::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let funnel = FunnelSpec::new(vec![
//!         StepSpec::new(
//!             "Evaluations",
//!             vec![BucketSpec::new("evaluator", "Evaluator", 100.0).with_drop("Never installed", 30.0)],
//!         ),
//!         StepSpec::new(
//!             "Installation",
//!             vec![BucketSpec::new("installed", "Installed", 70.0).with_flow("evaluator", 70.0)],
//!         ),
//!     ]);
//!
//!     let engine = LayoutEngine::builder()
//!         .with_header_height(50.0)
//!         .with_bucket_margin(20.0)
//!         .build()?;
//!
//!     let layout = engine.layout(&funnel, Dimensions::new(900.0, 500.0))?;
//!     for flow in &layout.flows {
//!         println!("{}: {} of its source", flow.id, flow.geometry.label.text);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod funnel;
pub mod geometry;
pub mod layout;
pub mod options;
pub mod prelude;
pub mod scene;
pub mod surface;
