//! Plan records.
//!
//! `*Input` types mirror the JSON contract one-to-one with every key optional,
//! so that absent keys are reported by [`crate::validate`] in a fixed order
//! instead of by the JSON decoder. The unprefixed types are the validated
//! form consumed by the renderers.

use crate::error::SetbackSide;
use crate::geometry;
use crate::validate::validate_and_build;
use crate::PlanError;
use floorplan_types::Rect;
use serde::Deserialize;

/// Title used when `meta.title` is absent.
pub const DEFAULT_TITLE: &str = "Floor Plan";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlanInput {
    pub plot: Option<PlotInput>,
    pub setbacks: Option<SetbacksInput>,
    pub rooms: Option<Vec<RoomInput>>,
    pub meta: Option<MetaInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlotInput {
    pub w: Option<f64>,
    pub h: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SetbacksInput {
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub front: Option<f64>,
    pub back: Option<f64>,
}

impl SetbacksInput {
    pub fn get(&self, side: SetbackSide) -> Option<f64> {
        match side {
            SetbackSide::Left => self.left,
            SetbackSide::Right => self.right,
            SetbackSide::Front => self.front,
            SetbackSide::Back => self.back,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RoomInput {
    pub name: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub w: Option<f64>,
    pub h: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MetaInput {
    pub title: Option<String>,
}

impl PlanInput {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

/// Outer lot dimensions in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plot {
    pub width: f64,
    pub height: f64,
}

/// Clearances from each plot edge in meters. `front` is the edge at plan
/// y = 0, `back` the edge at y = plot height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Setbacks {
    pub left: f64,
    pub right: f64,
    pub front: f64,
    pub back: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Room {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A plan that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub plot: Plot,
    pub setbacks: Setbacks,
    pub rooms: Vec<Room>,
    pub title: String,
}

impl Plan {
    pub fn plot_rect(&self) -> Rect {
        geometry::plot_rect(&self.plot)
    }

    pub fn buildable_area(&self) -> Rect {
        geometry::buildable_area(&self.plot, &self.setbacks)
    }
}

impl TryFrom<&PlanInput> for Plan {
    type Error = PlanError;

    fn try_from(input: &PlanInput) -> Result<Self, Self::Error> {
        validate_and_build(input)
    }
}

impl TryFrom<PlanInput> for Plan {
    type Error = PlanError;

    fn try_from(input: PlanInput) -> Result<Self, Self::Error> {
        validate_and_build(&input)
    }
}
