// src/error.rs
use floorplan_core::PlanError;
use floorplan_render_core::RenderError;
use thiserror::Error;

/// Top-level error for validating and rendering a plan.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The plan was rejected by validation. Displays the bare reason.
    #[error("{0}")]
    Plan(#[from] PlanError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The request body was not shaped like a render request.
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Configuration is invalid: {0}")]
    Config(String),
}

impl PipelineError {
    /// True when the caller sent something unusable, as opposed to a failure
    /// inside the renderer or the host.
    pub fn is_client_error(&self) -> bool {
        match self {
            PipelineError::Plan(_) | PipelineError::Json(_) | PipelineError::InvalidRequest(_) => {
                true
            }
            PipelineError::Render(RenderError::InvalidParameter(_)) => true,
            _ => false,
        }
    }
}
