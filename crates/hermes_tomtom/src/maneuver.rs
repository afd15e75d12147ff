use jiff::SignedDuration;
use serde::Serialize;

use crate::{coordinate::Coordinate, meters::Meters};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum InstructionDirection {
    #[default]
    NoDirection,
    Forward,
    BearRight,
    LightRight,
    Right,
    HardRight,
    UTurnRight,
    UTurnLeft,
    HardLeft,
    Left,
    LightLeft,
    BearLeft,
}

/// The action to take at the start of a segment.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Maneuver {
    pub(crate) direction: InstructionDirection,
    pub(crate) instruction_text: String,
    pub(crate) position: Coordinate,
    pub(crate) distance_to_next_instruction: Meters,
    pub(crate) time_to_next_instruction: SignedDuration,
}

impl Maneuver {
    pub fn direction(&self) -> InstructionDirection {
        self.direction
    }

    pub fn instruction_text(&self) -> &str {
        &self.instruction_text
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn distance_to_next_instruction(&self) -> Meters {
        self.distance_to_next_instruction
    }

    pub fn time_to_next_instruction(&self) -> SignedDuration {
        self.time_to_next_instruction
    }
}
