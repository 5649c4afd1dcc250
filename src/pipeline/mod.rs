//! Plan rendering pipeline.
//!
//! - [`PipelineBuilder`]: fluent builder for a [`RenderPipeline`]
//! - [`PipelineConfig`]: serde-loadable settings shared by every render
//! - [`RenderRequest`] / [`RenderEnvelope`]: JSON request and response shapes
//!
//! # Example
//!
//! ```ignore
//! use floorplan::{PipelineBuilder, PlanInput};
//!
//! let pipeline = PipelineBuilder::new()
//!     .with_pixels_per_meter(100)
//!     .build()?;
//!
//! let plan = PlanInput::from_json(&std::fs::read_to_string("plan.json")?)?;
//! let output = pipeline.render(&plan)?;
//! std::fs::write("plan.pdf", &output.pdf)?;
//! ```

pub mod api;
mod builder;
pub(crate) mod concurrency;
pub mod config;
pub mod envelope;
mod orchestrator;

pub use builder::PipelineBuilder;
pub use config::{ExecutionMode, PipelineConfig, PIXELS_PER_METER_ENV};
pub use envelope::{
    health, ErrorEnvelope, HealthReport, RenderEnvelope, RenderOutput, RenderRequest,
    SERVICE_NAME,
};
pub use orchestrator::RenderPipeline;
