#![allow(dead_code)]

use serde_json::{Value, json};

pub fn point(latitude: f64, longitude: f64) -> Value {
    json!({ "latitude": latitude, "longitude": longitude })
}

pub fn points(coordinates: &[(f64, f64)]) -> Vec<Value> {
    coordinates
        .iter()
        .map(|&(latitude, longitude)| point(latitude, longitude))
        .collect()
}

pub fn instruction(at: (f64, f64), maneuver: &str, offset: i64, time: i64) -> Value {
    json!({
        "point": point(at.0, at.1),
        "maneuver": maneuver,
        "message": maneuver.to_lowercase().replace('_', " "),
        "routeOffsetInMeters": offset,
        "travelTimeInSeconds": time,
        "drivingSide": "RIGHT",
    })
}

pub fn leg(coordinates: &[(f64, f64)], length: i64, time: i64) -> Value {
    json!({
        "summary": { "lengthInMeters": length, "travelTimeInSeconds": time },
        "points": points(coordinates),
    })
}

pub fn route(legs: Vec<Value>, instructions: Vec<Value>) -> Value {
    let last = instructions.last().cloned().unwrap_or(Value::Null);

    json!({
        "summary": {
            "lengthInMeters": last["routeOffsetInMeters"].as_i64().unwrap_or(0),
            "travelTimeInSeconds": last["travelTimeInSeconds"].as_i64().unwrap_or(0),
        },
        "legs": legs,
        "guidance": { "instructions": instructions, "instructionGroups": [] },
    })
}

pub fn reply(routes: Vec<Value>) -> Vec<u8> {
    json!({ "formatVersion": "0.0.12", "routes": routes })
        .to_string()
        .into_bytes()
}

/// Two legs through a waypoint at (0, 2). The second leg gets no departure
/// instruction, like the service does.
pub fn two_legs_route() -> Value {
    route(
        vec![
            leg(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0)], 200, 20),
            leg(&[(0.0, 2.0), (0.0, 3.0), (0.0, 4.0), (0.0, 5.0)], 300, 30),
        ],
        vec![
            instruction((0.0, 0.0), "DEPART", 0, 0),
            instruction((0.0, 1.0), "TURN_LEFT", 100, 10),
            instruction((0.0, 2.0), "WAYPOINT_REACHED", 200, 20),
            instruction((0.0, 4.0), "TURN_RIGHT", 400, 40),
            instruction((0.0, 5.0), "ARRIVE", 500, 50),
        ],
    )
}
