// src/pipeline/envelope.rs
//! Request and response shapes for callers that exchange JSON documents.

use crate::error::PipelineError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use floorplan_core::PlanInput;
use serde::Serialize;
use serde_json::Value;

/// Service name reported by [`health`].
pub const SERVICE_NAME: &str = "floorplan-renderer";

/// A render request body: `{"plan": {...}, "px_per_m": 70}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderRequest {
    pub plan: PlanInput,
    /// Preview density; the pipeline default applies when absent.
    pub px_per_m: Option<u32>,
}

impl RenderRequest {
    pub fn new(plan: PlanInput) -> Self {
        Self {
            plan,
            px_per_m: None,
        }
    }

    pub fn with_px_per_m(mut self, px_per_m: u32) -> Self {
        self.px_per_m = Some(px_per_m);
        self
    }

    /// Parses a request body. An empty body counts as `{}`.
    pub fn from_json(body: &str) -> Result<Self, PipelineError> {
        if body.trim().is_empty() {
            return Self::from_value(Value::Object(Default::default()));
        }
        Self::from_value(serde_json::from_str(body)?)
    }

    pub fn from_value(mut value: Value) -> Result<Self, PipelineError> {
        let plan = match value.get_mut("plan").map(Value::take) {
            Some(plan @ Value::Object(_)) => PlanInput::from_value(plan)?,
            _ => {
                return Err(PipelineError::InvalidRequest(
                    "Missing/invalid 'plan' object".to_string(),
                ));
            }
        };
        let px_per_m = match value.get("px_per_m") {
            None | Some(Value::Null) => None,
            Some(raw) => Some(parse_density(raw)?),
        };
        Ok(Self { plan, px_per_m })
    }

    /// Accepts either a request body or a bare plan document.
    pub fn from_document(value: Value) -> Result<Self, PipelineError> {
        if value.get("plan").is_some() {
            Self::from_value(value)
        } else {
            Ok(Self::new(PlanInput::from_value(value)?))
        }
    }
}

/// Densities are whole pixels; fractional values are truncated.
fn parse_density(raw: &Value) -> Result<u32, PipelineError> {
    let density = match raw {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.trunc() as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    density
        .and_then(|d| u32::try_from(d).ok())
        .ok_or_else(|| PipelineError::InvalidRequest("Invalid 'px_per_m' value".to_string()))
}

/// Both artifacts of one successful render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    pub svg: String,
    pub pdf: Vec<u8>,
}

impl RenderOutput {
    pub fn to_envelope(&self) -> RenderEnvelope {
        RenderEnvelope {
            svg: self.svg.clone(),
            pdf_base64: STANDARD.encode(&self.pdf),
        }
    }
}

/// JSON transport form of [`RenderOutput`], with the PDF in standard base64.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderEnvelope {
    pub svg: String,
    pub pdf_base64: String,
}

impl RenderEnvelope {
    pub fn decode_pdf(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.pdf_base64)
    }
}

/// `{"error": "<reason>"}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

impl From<&PipelineError> for ErrorEnvelope {
    fn from(err: &PipelineError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub ok: bool,
    pub service: &'static str,
}

pub fn health() -> HealthReport {
    HealthReport {
        ok: true,
        service: SERVICE_NAME,
    }
}
