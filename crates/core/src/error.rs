// src/error.rs
//! Validation errors for floor plans.

use std::fmt;
use thiserror::Error;

/// Where a missing key was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldScope {
    Plan,
    Plot,
    /// Zero-based index into `rooms`.
    Room(usize),
}

impl fmt::Display for FieldScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldScope::Plan => f.write_str("plan"),
            FieldScope::Plot => f.write_str("plot"),
            FieldScope::Room(index) => write!(f, "room #{}", index + 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetbackSide {
    Left,
    Right,
    Front,
    Back,
}

impl SetbackSide {
    /// Validation order.
    pub const ALL: [SetbackSide; 4] = [
        SetbackSide::Left,
        SetbackSide::Right,
        SetbackSide::Front,
        SetbackSide::Back,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SetbackSide::Left => "left",
            SetbackSide::Right => "right",
            SetbackSide::Front => "front",
            SetbackSide::Back => "back",
        }
    }
}

impl fmt::Display for SetbackSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The shape whose size was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    Plot,
    Room(String),
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Plot => f.write_str("Plot"),
            Subject::Room(name) => write!(f, "Room '{}'", name),
        }
    }
}

/// Reasons a plan is rejected. Validation stops at the first one found.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error("Missing '{field}' in {scope}")]
    MissingField {
        scope: FieldScope,
        field: &'static str,
    },

    #[error("{subject} dimensions must be > 0")]
    InvalidDimension { subject: Subject },

    #[error("Invalid setback '{side}'")]
    InvalidSetback { side: SetbackSide },

    #[error("Setbacks leave no buildable area (width {width}, height {height})")]
    DegenerateBuildableArea { width: f64, height: f64 },

    #[error("Room '{name}' is outside buildable area")]
    RoomOutOfBounds { name: String },
}

/// Payload-free discriminant of [`PlanError`], handy for matching in callers
/// that only care about the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanErrorKind {
    MissingField,
    InvalidDimension,
    InvalidSetback,
    DegenerateBuildableArea,
    RoomOutOfBounds,
}

impl PlanError {
    pub fn kind(&self) -> PlanErrorKind {
        match self {
            PlanError::MissingField { .. } => PlanErrorKind::MissingField,
            PlanError::InvalidDimension { .. } => PlanErrorKind::InvalidDimension,
            PlanError::InvalidSetback { .. } => PlanErrorKind::InvalidSetback,
            PlanError::DegenerateBuildableArea { .. } => PlanErrorKind::DegenerateBuildableArea,
            PlanError::RoomOutOfBounds { .. } => PlanErrorKind::RoomOutOfBounds,
        }
    }
}
