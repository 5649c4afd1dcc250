// src/pipeline/api.rs
//! One-call entry points using the default pipeline settings.

use super::builder::PipelineBuilder;
use crate::error::PipelineError;
use floorplan_core::PlanInput;

/// Validates `plan` and renders the SVG preview at `pixels_per_meter`.
///
/// Identical inputs always give byte-identical output.
pub fn render_vector(plan: &PlanInput, pixels_per_meter: u32) -> Result<String, PipelineError> {
    PipelineBuilder::new()
        .build()?
        .render_vector(plan, pixels_per_meter)
}

/// Validates `plan` and renders the single-page A4 PDF.
pub fn render_document(plan: &PlanInput) -> Result<Vec<u8>, PipelineError> {
    PipelineBuilder::new().build()?.render_document(plan)
}
