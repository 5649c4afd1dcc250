// src/pipeline/config.rs
use crate::error::PipelineError;
use floorplan_render_lopdf::DEFAULT_FOOTER_CREDIT;
use floorplan_render_svg::{DEFAULT_MARGIN_PX, DEFAULT_PIXELS_PER_METER};
use floorplan_types::PageSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Environment variable overriding the preview density.
pub const PIXELS_PER_METER_ENV: &str = "FLOORPLAN_PX_PER_M";

/// How the two artifacts of one render are scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Render the SVG and the PDF side by side on the rayon pool.
    /// Falls back to sequential when the `rayon-executor` feature is off.
    #[default]
    Parallel,
    /// Render the SVG first, then the PDF, on the calling thread.
    Sequential,
}

/// Settings shared by every render of a pipeline.
///
/// Every field has a default, so a config file only needs the keys it changes:
///
/// ```json
/// { "pixels_per_meter": 100, "page": { "size": "letter" } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Preview density used when a request does not name one.
    pub pixels_per_meter: u32,
    /// Blank border around the plot in the preview, in pixels.
    pub margin_px: u32,
    pub page: PageSettings,
    /// Line printed at the bottom of the printable page.
    pub footer_credit: String,
    pub execution: ExecutionMode,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            pixels_per_meter: DEFAULT_PIXELS_PER_METER,
            margin_px: DEFAULT_MARGIN_PX,
            page: PageSettings::default(),
            footer_credit: DEFAULT_FOOTER_CREDIT.to_string(),
            execution: ExecutionMode::default(),
        }
    }
}

impl PipelineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path.display(), e),
            ))
        })?;
        let config = Self::from_json_str(&source)?;
        log::debug!("Loaded pipeline config from '{}'", path.display());
        Ok(config)
    }

    /// Applies `FLOORPLAN_PX_PER_M` if it is set.
    pub fn apply_env(self) -> Result<Self, PipelineError> {
        match std::env::var(PIXELS_PER_METER_ENV) {
            Ok(raw) => self.with_density_override(&raw),
            Err(_) => Ok(self),
        }
    }

    fn with_density_override(mut self, raw: &str) -> Result<Self, PipelineError> {
        self.pixels_per_meter = raw.trim().parse().map_err(|_| {
            PipelineError::Config(format!(
                "{} must be a positive integer, got '{}'",
                PIXELS_PER_METER_ENV, raw
            ))
        })?;
        Ok(self)
    }
}
