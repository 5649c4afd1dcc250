#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use floorplan::{PipelineBuilder, PipelineError, PlanInput};
use lopdf::Document as LopdfDocument;
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }
}

pub fn plan_input(plan: &Value) -> Result<PlanInput, PipelineError> {
    Ok(PlanInput::from_value(plan.clone())?)
}

/// Render the PDF of a plan document with default settings
pub fn generate_pdf(plan: &Value) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = floorplan::render_document(&plan_input(plan)?)?;
    GeneratedPdf::from_bytes(bytes)
}

/// Render the PDF of a plan document with a customized pipeline
pub fn generate_pdf_with(
    builder: PipelineBuilder,
    plan: &Value,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = builder.build()?.render_document(&plan_input(plan)?)?;
    GeneratedPdf::from_bytes(bytes)
}

/// Render the SVG preview of a plan document
pub fn generate_svg(plan: &Value, pixels_per_meter: u32) -> Result<String, PipelineError> {
    floorplan::render_vector(&plan_input(plan)?, pixels_per_meter)
}
