//! Floor plan validation and rendering.
//!
//! A plan (a rectangular plot, four setbacks, and axis-aligned rooms in meters)
//! is validated into a typed [`Plan`] and then drawn two ways: an SVG preview
//! at a chosen pixel density and a single-page printable PDF.
//!
//! ```ignore
//! let plan = floorplan::PlanInput::from_json(&body)?;
//! let svg = floorplan::render_vector(&plan, floorplan::DEFAULT_PIXELS_PER_METER)?;
//! let pdf = floorplan::render_document(&plan)?;
//! ```

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::api::{render_document, render_vector};
pub use pipeline::{
    health, ErrorEnvelope, ExecutionMode, HealthReport, PipelineBuilder, PipelineConfig,
    RenderEnvelope, RenderOutput, RenderPipeline, RenderRequest,
};

pub use floorplan_core::{
    validate, validate_and_build, Plan, PlanError, PlanErrorKind, PlanInput, Plot, Room, Setbacks,
};
pub use floorplan_render_core::{PlanRenderer, RenderError};
pub use floorplan_render_lopdf::LopdfRenderer;
pub use floorplan_render_svg::{SvgRenderer, DEFAULT_PIXELS_PER_METER};
pub use floorplan_types::{PageSettings, PageSize};
