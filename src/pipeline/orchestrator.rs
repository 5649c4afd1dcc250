// src/pipeline/orchestrator.rs
use super::concurrency;
use super::config::PipelineConfig;
use super::envelope::{RenderOutput, RenderRequest};
use crate::error::PipelineError;
use floorplan_core::{validate_and_build, Plan, PlanInput};
use floorplan_render_core::render_logged;
use floorplan_render_lopdf::LopdfRenderer;
use floorplan_render_svg::SvgRenderer;
use log::{debug, info};
use std::time::Instant;

/// Validates plans and renders the preview and the printable page.
///
/// A pipeline holds only immutable settings; it can be shared across threads
/// and every call is independent of the ones before it.
#[derive(Debug, Clone)]
pub struct RenderPipeline {
    config: PipelineConfig,
    pdf: LopdfRenderer,
}

impl RenderPipeline {
    pub(super) fn new(config: PipelineConfig, pdf: LopdfRenderer) -> Self {
        Self { config, pdf }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Checks `input` and returns the typed plan, or the first violation found.
    pub fn validate(&self, input: &PlanInput) -> Result<Plan, PipelineError> {
        Ok(validate_and_build(input)?)
    }

    /// Validates, then renders the SVG preview at `pixels_per_meter`.
    pub fn render_vector(
        &self,
        input: &PlanInput,
        pixels_per_meter: u32,
    ) -> Result<String, PipelineError> {
        let plan = self.validate(input)?;
        Ok(render_logged(&self.svg_renderer(pixels_per_meter), &plan)?)
    }

    /// Validates, then renders the single-page PDF.
    pub fn render_document(&self, input: &PlanInput) -> Result<Vec<u8>, PipelineError> {
        let plan = self.validate(input)?;
        Ok(render_logged(&self.pdf, &plan)?)
    }

    /// Validates once and renders both artifacts at the configured density.
    pub fn render(&self, input: &PlanInput) -> Result<RenderOutput, PipelineError> {
        let plan = self.validate(input)?;
        self.render_plan(&plan, self.config.pixels_per_meter)
    }

    pub fn render_request(&self, request: &RenderRequest) -> Result<RenderOutput, PipelineError> {
        let plan = self.validate(&request.plan)?;
        let density = request.px_per_m.unwrap_or(self.config.pixels_per_meter);
        self.render_plan(&plan, density)
    }

    /// Parses a `{"plan": ..., "px_per_m": ...}` body and renders it.
    pub fn render_json(&self, body: &str) -> Result<RenderOutput, PipelineError> {
        let request = RenderRequest::from_json(body)?;
        self.render_request(&request)
    }

    /// Renders an already validated plan. Neither artifact is returned unless both succeed.
    pub fn render_plan(
        &self,
        plan: &Plan,
        pixels_per_meter: u32,
    ) -> Result<RenderOutput, PipelineError> {
        let start = Instant::now();
        let svg_renderer = self.svg_renderer(pixels_per_meter);
        let (svg, pdf) = concurrency::join(
            self.config.execution,
            || render_logged(&svg_renderer, plan),
            || render_logged(&self.pdf, plan),
        );
        let output = RenderOutput {
            svg: svg?,
            pdf: pdf?,
        };
        info!(
            "Rendered '{}' ({} rooms) in {:?}",
            plan.title,
            plan.rooms.len(),
            start.elapsed()
        );
        Ok(output)
    }

    fn svg_renderer(&self, pixels_per_meter: u32) -> SvgRenderer {
        debug!("Preview density {} px/m", pixels_per_meter);
        SvgRenderer::new(pixels_per_meter).with_margin(self.config.margin_px)
    }
}
