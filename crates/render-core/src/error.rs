use thiserror::Error;

/// Failures while turning a validated plan into an artifact.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The PDF document could not be assembled or serialized.
    #[error("PDF generation error: {0}")]
    Pdf(String),
    /// A render setting (density, page geometry) cannot produce a drawing.
    #[error("Invalid render parameter: {0}")]
    InvalidParameter(String),
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}
