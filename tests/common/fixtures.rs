#![allow(dead_code)]

use serde_json::{json, Value};

/// Plot 10x8 with 1 m setbacks all round: buildable area is (1,1)-(9,7).
pub fn plan_with_rooms(rooms: Value) -> Value {
    json!({
        "plot": { "w": 10, "h": 8 },
        "setbacks": { "left": 1, "right": 1, "front": 1, "back": 1 },
        "rooms": rooms
    })
}

pub fn empty_plan() -> Value {
    plan_with_rooms(json!([]))
}

/// A single 4x3 bedroom in the front-left corner of the buildable area.
pub fn bed_plan() -> Value {
    plan_with_rooms(json!([{ "name": "Bed", "x": 1, "y": 1, "w": 4, "h": 3 }]))
}

/// A room spanning the buildable width, `width` meters wide.
pub fn wide_room_plan(width: f64) -> Value {
    plan_with_rooms(json!([{ "name": "Hall", "x": 1, "y": 1, "w": width, "h": 2 }]))
}

pub fn house_plan() -> Value {
    json!({
        "plot": { "w": 18, "h": 12 },
        "setbacks": { "left": 1.5, "right": 1.5, "front": 3, "back": 2 },
        "rooms": [
            { "name": "Living", "x": 1.5, "y": 3, "w": 6, "h": 4 },
            { "name": "Kitchen", "x": 7.5, "y": 3, "w": 4, "h": 4 },
            { "name": "Bath", "x": 11.5, "y": 3, "w": 2.5, "h": 2 },
            { "name": "Bed 1", "x": 1.5, "y": 7, "w": 5, "h": 3 },
            { "name": "Bed 2", "x": 6.5, "y": 7, "w": 5, "h": 3 }
        ],
        "meta": { "title": "Maple Street 12" }
    })
}

/// 5x5 plot whose side setbacks consume the whole width.
pub fn degenerate_plan() -> Value {
    json!({
        "plot": { "w": 5, "h": 5 },
        "setbacks": { "left": 3, "right": 3, "front": 0, "back": 0 },
        "rooms": []
    })
}
