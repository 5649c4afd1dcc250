// src/pipeline/builder.rs
use super::config::{ExecutionMode, PipelineConfig};
use super::orchestrator::RenderPipeline;
use crate::error::PipelineError;
use floorplan_render_lopdf::LopdfRenderer;
use floorplan_types::{PageSettings, PageSize};
use std::path::Path;

/// A builder for creating a `RenderPipeline`.
#[derive(Debug, Clone, Default)]
pub struct PipelineBuilder {
    config: PipelineConfig,
}

impl PipelineBuilder {
    /// Creates a new `PipelineBuilder` with default settings.
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces every setting with `config`.
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads settings from a JSON config file. Keys the file omits keep their defaults.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        self.config = PipelineConfig::from_json_file(path)?;
        Ok(self)
    }

    /// Sets the default preview density in pixels per meter.
    pub fn with_pixels_per_meter(mut self, pixels_per_meter: u32) -> Self {
        self.config.pixels_per_meter = pixels_per_meter;
        self
    }

    pub fn with_margin_px(mut self, margin_px: u32) -> Self {
        self.config.margin_px = margin_px;
        self
    }

    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.config.page.size = size;
        self
    }

    pub fn with_page_settings(mut self, page: PageSettings) -> Self {
        self.config.page = page;
        self
    }

    pub fn with_footer_credit(mut self, credit: impl Into<String>) -> Self {
        self.config.footer_credit = credit.into();
        self
    }

    /// Selects whether the two artifacts are rendered side by side.
    pub fn with_execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution = mode;
        self
    }

    /// Consumes the builder and creates the `RenderPipeline`.
    ///
    /// Settings that would make every render fail are rejected here.
    pub fn build(self) -> Result<RenderPipeline, PipelineError> {
        let config = self.config;
        if config.pixels_per_meter == 0 {
            return Err(PipelineError::Config(
                "pixels_per_meter must be greater than 0".to_string(),
            ));
        }

        let page = &config.page;
        let (width, height) = page.size.dimensions_pt();
        let valid_numbers = [width, height, page.margin_pt, page.header_pt]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0);
        if !valid_numbers
            || width - 2.0 * page.margin_pt <= 0.0
            || height - 2.0 * page.margin_pt - page.header_pt <= 0.0
        {
            return Err(PipelineError::Config(format!(
                "page {:.1}x{:.1} pt leaves no drawable area with {} pt margins and a {} pt header",
                width, height, page.margin_pt, page.header_pt
            )));
        }

        log::debug!(
            "Building pipeline: {} px/m preview, {:?} page, {:?} execution",
            config.pixels_per_meter,
            page.size,
            config.execution
        );

        let pdf = LopdfRenderer::new(config.page).with_footer_credit(config.footer_credit.clone());
        Ok(RenderPipeline::new(config, pdf))
    }
}
