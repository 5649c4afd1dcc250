//! Fail-fast plan validation.
//!
//! Checks run in a fixed order and the first violation is returned:
//! top-level keys, plot size, setbacks (left, right, front, back), buildable
//! area, then every room in input order (required fields, size, containment).

use crate::error::{FieldScope, PlanError, SetbackSide, Subject};
use crate::geometry::buildable_area;
use crate::plan::{Plan, PlanInput, Plot, Room, RoomInput, Setbacks, SetbacksInput, DEFAULT_TITLE};

/// Checks a plan without keeping the typed result.
pub fn validate(input: &PlanInput) -> Result<(), PlanError> {
    validate_and_build(input).map(|_| ())
}

/// Validates a plan and returns its typed form.
pub fn validate_and_build(input: &PlanInput) -> Result<Plan, PlanError> {
    let plot_in = require(input.plot.as_ref(), FieldScope::Plan, "plot")?;
    let setbacks_in = require(input.setbacks.as_ref(), FieldScope::Plan, "setbacks")?;
    let rooms_in = require(input.rooms.as_ref(), FieldScope::Plan, "rooms")?;

    let plot = Plot {
        width: require(plot_in.w, FieldScope::Plot, "w")?,
        height: require(plot_in.h, FieldScope::Plot, "h")?,
    };
    if !is_positive_length(plot.width) || !is_positive_length(plot.height) {
        return Err(PlanError::InvalidDimension {
            subject: Subject::Plot,
        });
    }

    let setbacks = check_setbacks(setbacks_in)?;

    let area = buildable_area(&plot, &setbacks);
    if !area.size().is_positive() {
        return Err(PlanError::DegenerateBuildableArea {
            width: area.width,
            height: area.height,
        });
    }

    let mut rooms = Vec::with_capacity(rooms_in.len());
    for (index, room_in) in rooms_in.iter().enumerate() {
        let room = check_room_fields(index, room_in)?;
        if !is_positive_length(room.width) || !is_positive_length(room.height) {
            return Err(PlanError::InvalidDimension {
                subject: Subject::Room(room.name),
            });
        }
        if !area.contains_rect(&room.rect()) {
            return Err(PlanError::RoomOutOfBounds { name: room.name });
        }
        rooms.push(room);
    }

    let title = input
        .meta
        .as_ref()
        .and_then(|meta| meta.title.clone())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    log::debug!(
        "Validated plan '{}': plot {}x{} m, buildable {}x{} m, {} room(s)",
        title,
        plot.width,
        plot.height,
        area.width,
        area.height,
        rooms.len()
    );

    Ok(Plan {
        plot,
        setbacks,
        rooms,
        title,
    })
}

fn require<T>(value: Option<T>, scope: FieldScope, field: &'static str) -> Result<T, PlanError> {
    value.ok_or(PlanError::MissingField { scope, field })
}

/// Rejects zero, negative, NaN and infinite lengths.
fn is_positive_length(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn check_setbacks(input: &SetbacksInput) -> Result<Setbacks, PlanError> {
    let mut values = [0.0; 4];
    for (slot, side) in values.iter_mut().zip(SetbackSide::ALL) {
        *slot = match input.get(side) {
            Some(value) if value.is_finite() && value >= 0.0 => value,
            _ => return Err(PlanError::InvalidSetback { side }),
        };
    }
    let [left, right, front, back] = values;
    Ok(Setbacks {
        left,
        right,
        front,
        back,
    })
}

fn check_room_fields(index: usize, input: &RoomInput) -> Result<Room, PlanError> {
    let scope = FieldScope::Room(index);
    Ok(Room {
        name: require(input.name.clone(), scope, "name")?,
        x: require(input.x, scope, "x")?,
        y: require(input.y, scope, "y")?,
        width: require(input.w, scope, "w")?,
        height: require(input.h, scope, "h")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlanErrorKind;
    use serde_json::{json, Value};

    fn plan(value: Value) -> PlanInput {
        PlanInput::from_value(value).unwrap()
    }

    fn base_plan(rooms: Value) -> PlanInput {
        plan(json!({
            "plot": { "w": 10, "h": 8 },
            "setbacks": { "left": 1, "right": 1, "front": 1, "back": 1 },
            "rooms": rooms
        }))
    }

    fn kind_of(input: &PlanInput) -> PlanErrorKind {
        validate(input).unwrap_err().kind()
    }

    #[test]
    fn empty_room_list_is_valid() {
        assert!(validate(&base_plan(json!([]))).is_ok());
    }

    #[test]
    fn bed_scenario_builds_typed_plan() {
        let built = validate_and_build(&base_plan(json!([
            { "name": "Bed", "x": 1, "y": 1, "w": 4, "h": 3 }
        ])))
        .unwrap();
        assert_eq!(built.title, DEFAULT_TITLE);
        assert_eq!(built.rooms.len(), 1);
        assert_eq!(built.rooms[0].name, "Bed");
        assert_eq!(built.buildable_area().max_x(), 9.0);
    }

    #[test]
    fn room_touching_boundary_is_valid() {
        let input = base_plan(json!([{ "name": "Hall", "x": 1, "y": 1, "w": 8, "h": 6 }]));
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn room_past_boundary_is_out_of_bounds() {
        let input = base_plan(json!([{ "name": "Bed", "x": 1, "y": 1, "w": 8.01, "h": 3 }]));
        assert_eq!(
            validate(&input),
            Err(PlanError::RoomOutOfBounds { name: "Bed".into() })
        );

        let below = base_plan(json!([{ "name": "Porch", "x": 2, "y": 0.5, "w": 1, "h": 1 }]));
        assert_eq!(kind_of(&below), PlanErrorKind::RoomOutOfBounds);
    }

    #[test]
    fn degenerate_buildable_area() {
        let input = plan(json!({
            "plot": { "w": 5, "h": 5 },
            "setbacks": { "left": 3, "right": 3, "front": 0, "back": 0 },
            "rooms": []
        }));
        assert_eq!(
            validate(&input),
            Err(PlanError::DegenerateBuildableArea {
                width: -1.0,
                height: 5.0
            })
        );
    }

    #[test]
    fn setbacks_exactly_consuming_plot_are_degenerate() {
        let input = plan(json!({
            "plot": { "w": 6, "h": 5 },
            "setbacks": { "left": 3, "right": 3, "front": 0, "back": 0 },
            "rooms": []
        }));
        assert_eq!(kind_of(&input), PlanErrorKind::DegenerateBuildableArea);
    }

    #[test]
    fn missing_or_negative_setback_names_the_side() {
        let missing = plan(json!({
            "plot": { "w": 10, "h": 8 },
            "setbacks": { "left": 1, "right": 1, "back": 1 },
            "rooms": []
        }));
        assert_eq!(
            validate(&missing),
            Err(PlanError::InvalidSetback {
                side: SetbackSide::Front
            })
        );

        let negative = plan(json!({
            "plot": { "w": 10, "h": 8 },
            "setbacks": { "left": 1, "right": -0.1, "front": 1, "back": 1 },
            "rooms": []
        }));
        assert_eq!(
            validate(&negative),
            Err(PlanError::InvalidSetback {
                side: SetbackSide::Right
            })
        );
    }

    #[test]
    fn setback_error_wins_over_later_room_errors() {
        let input = plan(json!({
            "plot": { "w": 10, "h": 8 },
            "setbacks": { "left": -1, "right": 1, "front": 1, "back": 1 },
            "rooms": [{ "name": "Huge", "x": 0, "y": 0, "w": 100, "h": 100 }]
        }));
        assert_eq!(kind_of(&input), PlanErrorKind::InvalidSetback);
    }

    #[test]
    fn top_level_keys_checked_in_order() {
        assert_eq!(
            validate(&plan(json!({}))),
            Err(PlanError::MissingField {
                scope: FieldScope::Plan,
                field: "plot"
            })
        );
        assert_eq!(
            validate(&plan(json!({ "plot": { "w": 1, "h": 1 }, "setbacks": {} }))),
            Err(PlanError::MissingField {
                scope: FieldScope::Plan,
                field: "rooms"
            })
        );
    }

    #[test]
    fn plot_must_be_positive() {
        let input = plan(json!({
            "plot": { "w": 0, "h": 8 },
            "setbacks": { "left": 1, "right": 1, "front": 1, "back": 1 },
            "rooms": []
        }));
        assert_eq!(kind_of(&input), PlanErrorKind::InvalidDimension);

        let missing_h = plan(json!({ "plot": { "w": 3 }, "setbacks": {}, "rooms": [] }));
        assert_eq!(
            validate(&missing_h),
            Err(PlanError::MissingField {
                scope: FieldScope::Plot,
                field: "h"
            })
        );
    }

    #[test]
    fn room_fields_before_size_before_containment() {
        let missing = base_plan(json!([
            { "name": "Ok", "x": 1, "y": 1, "w": 1, "h": 1 },
            { "name": "NoWidth", "x": 50, "y": 1, "h": -1 }
        ]));
        assert_eq!(
            validate(&missing),
            Err(PlanError::MissingField {
                scope: FieldScope::Room(1),
                field: "w"
            })
        );

        let bad_size = base_plan(json!([{ "name": "Flat", "x": 50, "y": 1, "w": 1, "h": 0 }]));
        assert_eq!(
            validate(&bad_size),
            Err(PlanError::InvalidDimension {
                subject: Subject::Room("Flat".into())
            })
        );
    }

    #[test]
    fn first_bad_room_is_reported() {
        let input = base_plan(json!([
            { "name": "A", "x": 1, "y": 1, "w": 20, "h": 1 },
            { "name": "B", "x": 1, "y": 1, "w": 1, "h": -1 }
        ]));
        assert_eq!(
            validate(&input),
            Err(PlanError::RoomOutOfBounds { name: "A".into() })
        );
    }

    #[test]
    fn meta_title_overrides_default() {
        let input = plan(json!({
            "plot": { "w": 10, "h": 8 },
            "setbacks": { "left": 0, "right": 0, "front": 0, "back": 0 },
            "rooms": [],
            "meta": { "title": "Lot 42" }
        }));
        assert_eq!(Plan::try_from(&input).unwrap().title, "Lot 42");
    }

    #[test]
    fn verdict_is_stable_across_calls() {
        let input = base_plan(json!([{ "name": "Bed", "x": 1, "y": 1, "w": 8.01, "h": 3 }]));
        assert_eq!(validate(&input), validate(&input));
    }
}
