use serde::{Deserialize, Serialize};

use crate::{coordinate::Coordinate, error::DecodeError, maneuver::InstructionDirection};

/// Calculate-route reply, as returned by the TomTom routing API.
#[derive(Deserialize, Debug)]
pub struct WireResponse {
    pub routes: Vec<WireRoute>,
}

#[derive(Deserialize, Debug)]
pub struct WireRoute {
    pub summary: WireSummary,
    pub legs: Vec<WireLeg>,
    #[serde(default)]
    pub guidance: WireGuidance,
}

#[derive(Deserialize, Debug, Default, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct WireSummary {
    pub length_in_meters: i64,
    pub travel_time_in_seconds: i64,
}

#[derive(Deserialize, Debug)]
pub struct WireLeg {
    #[serde(default)]
    pub points: Vec<Coordinate>,

    // Legs without a summary are accepted as zero length
    #[serde(default)]
    pub summary: WireSummary,
}

#[derive(Deserialize, Debug, Default)]
pub struct WireGuidance {
    #[serde(default)]
    pub instructions: Vec<Instruction>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Instruction {
    pub point: Coordinate,

    #[serde(default)]
    pub maneuver: ManeuverKind,

    #[serde(default)]
    pub message: String,

    /// Cumulative distance from the route origin
    #[serde(default)]
    pub route_offset_in_meters: i64,

    /// Cumulative travel time from the route origin
    #[serde(default)]
    pub travel_time_in_seconds: i64,

    #[serde(default)]
    pub driving_side: Option<DrivingSide>,

    #[serde(default)]
    pub instruction_type: Option<InstructionType>,
}

impl Instruction {
    /// DEPART instruction anchored on a leg head, carrying the cumulative
    /// measurements of the instruction that reached the waypoint.
    pub(crate) fn depart_from_waypoint(point: Coordinate, waypoint_reached: &Instruction) -> Self {
        Instruction {
            point,
            maneuver: ManeuverKind::Depart,
            message: String::from("Depart from waypoint"),
            route_offset_in_meters: waypoint_reached.route_offset_in_meters,
            travel_time_in_seconds: waypoint_reached.travel_time_in_seconds,
            driving_side: None,
            instruction_type: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ManeuverKind {
    Arrive,
    ArriveLeft,
    ArriveRight,
    Depart,
    Straight,
    KeepRight,
    BearRight,
    TurnRight,
    SharpRight,
    KeepLeft,
    BearLeft,
    TurnLeft,
    SharpLeft,
    MakeUturn,
    EnterMotorway,
    EnterFreeway,
    EnterHighway,
    TakeExit,
    MotorwayExitLeft,
    MotorwayExitRight,
    TakeFerry,
    RoundaboutCross,
    RoundaboutRight,
    RoundaboutLeft,
    RoundaboutBack,
    TryMakeUturn,
    Follow,
    SwitchParallelRoad,
    SwitchMainRoad,
    EntranceRamp,
    WaypointLeft,
    WaypointRight,
    WaypointReached,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ManeuverKind {
    pub fn direction(&self) -> InstructionDirection {
        match self {
            ManeuverKind::Straight | ManeuverKind::RoundaboutCross | ManeuverKind::Follow => {
                InstructionDirection::Forward
            }
            ManeuverKind::KeepRight => InstructionDirection::LightRight,
            ManeuverKind::BearRight => InstructionDirection::BearRight,
            ManeuverKind::TurnRight
            | ManeuverKind::MotorwayExitRight
            | ManeuverKind::RoundaboutRight => InstructionDirection::Right,
            ManeuverKind::SharpRight => InstructionDirection::HardRight,
            ManeuverKind::KeepLeft => InstructionDirection::LightLeft,
            ManeuverKind::BearLeft => InstructionDirection::BearLeft,
            ManeuverKind::TurnLeft
            | ManeuverKind::MotorwayExitLeft
            | ManeuverKind::RoundaboutLeft => InstructionDirection::Left,
            ManeuverKind::SharpLeft => InstructionDirection::HardLeft,
            ManeuverKind::MakeUturn | ManeuverKind::TryMakeUturn | ManeuverKind::RoundaboutBack => {
                InstructionDirection::UTurnLeft
            }
            ManeuverKind::Arrive
            | ManeuverKind::ArriveLeft
            | ManeuverKind::ArriveRight
            | ManeuverKind::Depart
            | ManeuverKind::EnterMotorway
            | ManeuverKind::EnterFreeway
            | ManeuverKind::EnterHighway
            | ManeuverKind::TakeExit
            | ManeuverKind::TakeFerry
            | ManeuverKind::SwitchParallelRoad
            | ManeuverKind::SwitchMainRoad
            | ManeuverKind::EntranceRamp
            | ManeuverKind::WaypointLeft
            | ManeuverKind::WaypointRight
            | ManeuverKind::WaypointReached
            | ManeuverKind::Unknown => InstructionDirection::NoDirection,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DrivingSide {
    Left,
    Right,
    #[serde(other)]
    Unknown,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstructionType {
    Turn,
    RoadChange,
    LocationDeparture,
    LocationArrival,
    DirectionInfo,
    LocationWaypoint,
    #[serde(other)]
    Unknown,
}

impl WireResponse {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        let value: serde_json::Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, DecodeError> {
        // serde would happily read a struct out of a json array
        if !value.is_object() {
            return Err(DecodeError::NotAnObject);
        }

        let response: WireResponse = serde_json::from_value(value)?;

        for (route_index, route) in response.routes.iter().enumerate() {
            if route.legs.is_empty() {
                return Err(DecodeError::NoLegs { route: route_index });
            }

            if let Some(leg_index) = route.legs.iter().position(|leg| leg.points.is_empty()) {
                return Err(DecodeError::EmptyLeg {
                    route: route_index,
                    leg: leg_index,
                });
            }
        }

        Ok(response)
    }
}
