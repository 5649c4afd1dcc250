//! # floorplan-core
//!
//! The floor plan model and the rules every plan must satisfy before it can be
//! drawn.
//!
//! - **plan**: raw records decoded from JSON (`PlanInput`) and the validated,
//!   fully-typed `Plan`
//! - **geometry**: plot and buildable-area rectangles shared by validation and
//!   the renderers
//! - **validate**: fail-fast validation turning a `PlanInput` into a `Plan`
//! - **error**: the validation error taxonomy
//!
//! A `Plan` can only be obtained through validation, so renderers taking
//! `&Plan` never see an ill-formed plan.

pub use floorplan_types as types;

pub mod error;
pub mod geometry;
pub mod plan;
pub mod validate;

pub use error::{FieldScope, PlanError, PlanErrorKind, SetbackSide, Subject};
pub use geometry::{buildable_area, plot_rect};
pub use plan::{
    MetaInput, Plan, PlanInput, Plot, PlotInput, Room, RoomInput, Setbacks, SetbacksInput,
    DEFAULT_TITLE,
};
pub use validate::{validate, validate_and_build};
