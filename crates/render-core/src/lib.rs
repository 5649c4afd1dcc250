//! Core rendering abstractions for floor plan output.
//!
//! This crate provides the pieces every output backend shares:
//! - `PlanRenderer` trait implemented by the SVG and PDF backends
//! - Error types for rendering operations
//! - `render_logged`, which runs a renderer and logs what it produced

mod error;
mod traits;

pub use error::RenderError;
pub use traits::{render_logged, ArtifactSize, PlanRenderer};
