use serde_json::json;

use crate::{
    coordinate::Coordinate,
    wire::{DrivingSide, Instruction, ManeuverKind},
};

pub fn c(latitude: f64, longitude: f64) -> Coordinate {
    Coordinate::new(latitude, longitude)
}

pub fn instruction(
    point: Coordinate,
    maneuver: ManeuverKind,
    route_offset_in_meters: i64,
    travel_time_in_seconds: i64,
) -> Instruction {
    Instruction {
        point,
        maneuver,
        message: format!("{:?}", maneuver),
        route_offset_in_meters,
        travel_time_in_seconds,
        driving_side: Some(DrivingSide::Right),
        instruction_type: None,
    }
}

/// A calculate-route reply with a single route. Maneuvers are written as
/// `DEPART`, `ARRIVE`, ... the way the service spells them.
pub fn reply_json(legs: &[Vec<Coordinate>], instructions: &[Instruction]) -> String {
    let last = instructions.last();

    json!({
        "formatVersion": "0.0.12",
        "routes": [{
            "summary": {
                "lengthInMeters": last.map(|i| i.route_offset_in_meters).unwrap_or(0),
                "travelTimeInSeconds": last.map(|i| i.travel_time_in_seconds).unwrap_or(0),
            },
            "legs": legs.iter().map(|points| json!({
                "summary": { "lengthInMeters": 0, "travelTimeInSeconds": 0 },
                "points": points,
            })).collect::<Vec<_>>(),
            "guidance": {
                "instructions": instructions.iter().map(|i| json!({
                    "point": i.point,
                    "maneuver": i.maneuver,
                    "message": i.message,
                    "routeOffsetInMeters": i.route_offset_in_meters,
                    "travelTimeInSeconds": i.travel_time_in_seconds,
                })).collect::<Vec<_>>(),
            },
        }],
    })
    .to_string()
}

