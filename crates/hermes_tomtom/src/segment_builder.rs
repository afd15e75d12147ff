use jiff::SignedDuration;
use tracing::debug;

use crate::{
    aligner::repair_leg_head,
    coordinate::Coordinate,
    coordinate_index::CoordinateIndex,
    error::DecodeError,
    maneuver::{InstructionDirection, Maneuver},
    meters::Meters,
    wire::{DrivingSide, Instruction},
};

/// A segment whose distance and time are still the cumulative values reported
/// at its instruction.
#[derive(Debug, Clone)]
pub(crate) struct PendingSegment {
    pub path: Vec<Coordinate>,
    pub maneuver: Maneuver,
    pub route_offset: Meters,
    pub elapsed: SignedDuration,
    pub is_leg_last_segment: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LegState {
    AtLegStart,
    InLeg,
    LegDone,
}

/// Carves the leg geometries into one segment per instruction.
pub(crate) struct SegmentBuilder<'a> {
    legs_geometry: &'a [Vec<Coordinate>],
    index: &'a CoordinateIndex,
}

impl<'a> SegmentBuilder<'a> {
    pub fn new(legs_geometry: &'a [Vec<Coordinate>], index: &'a CoordinateIndex) -> Self {
        SegmentBuilder {
            legs_geometry,
            index,
        }
    }

    pub fn build(
        &self,
        instructions: &[Instruction],
    ) -> Result<Vec<Vec<PendingSegment>>, DecodeError> {
        if instructions.is_empty() || self.legs_geometry.is_empty() {
            return Err(DecodeError::NotEnoughInstructions);
        }

        let mut legs_segments: Vec<Vec<PendingSegment>> = vec![Vec::new()];
        let mut leg = 0;
        let mut cursor = 0;
        let mut state = LegState::AtLegStart;
        let mut idx = 0;

        while idx < instructions.len() {
            let geometry = &self.legs_geometry[leg];
            let current = &instructions[idx];

            let injected = if state == LegState::AtLegStart && idx > 0 {
                repair_leg_head(&geometry[0], current, &instructions[idx - 1])
            } else {
                None
            };

            if injected.is_some() {
                debug!("Injecting departure at the head of leg {}", leg);
            }

            let instruction = injected.as_ref().unwrap_or(current);
            let is_arrival = injected.is_none() && idx + 1 == instructions.len();

            let (end, switch_leg) = if is_arrival {
                (geometry.len() - 1, false)
            } else {
                let next_idx = if injected.is_some() { idx } else { idx + 1 };
                let next = &instructions[next_idx];

                let leg_end = geometry.len() - 1;
                let next_leg_head = self.legs_geometry.get(leg + 1).and_then(|g| g.first());

                if next_idx + 1 == instructions.len() && next_leg_head.is_none() {
                    // The arrival closes the last leg, even when the route loops
                    // back over its own departure
                    (leg_end, false)
                } else {
                    match self.index.locate_in_leg_from(leg, &next.point, cursor) {
                        // An explicit departure repeating the waypoint starts the next leg
                        Some(end)
                            if end == cursor
                                && end == leg_end
                                && next_leg_head == Some(&next.point) =>
                        {
                            (end, true)
                        }
                        Some(end) => (end, false),
                        None => (leg_end, true),
                    }
                }
            };

            let is_leg_last_segment = switch_leg || is_arrival;
            legs_segments[leg].push(PendingSegment {
                path: geometry[cursor..=end].to_vec(),
                maneuver: create_maneuver(instruction),
                route_offset: Meters::from(instruction.route_offset_in_meters),
                elapsed: SignedDuration::from_secs(instruction.travel_time_in_seconds),
                is_leg_last_segment,
            });

            state = if is_leg_last_segment {
                LegState::LegDone
            } else {
                LegState::InLeg
            };
            cursor = end;

            if switch_leg {
                leg += 1;
                if leg >= self.legs_geometry.len() {
                    return Err(DecodeError::LegOverflow { instruction: idx });
                }

                legs_segments.push(Vec::new());
                cursor = 0;
                state = LegState::AtLegStart;
            }

            // The real instruction is processed again after an injected departure
            if injected.is_none() {
                idx += 1;
            }
        }

        debug_assert_eq!(state, LegState::LegDone);

        if legs_segments.len() < self.legs_geometry.len() {
            return Err(DecodeError::UncoveredLegs {
                legs: self.legs_geometry.len(),
                covered: legs_segments.len(),
            });
        }

        Ok(legs_segments)
    }
}

fn create_maneuver(instruction: &Instruction) -> Maneuver {
    let mut direction = instruction.maneuver.direction();

    // U-turns are made towards the driving side
    if direction == InstructionDirection::UTurnLeft
        && instruction.driving_side == Some(DrivingSide::Left)
    {
        direction = InstructionDirection::UTurnRight;
    }

    Maneuver {
        direction,
        instruction_text: instruction.message.clone(),
        position: instruction.point,
        distance_to_next_instruction: Meters::ZERO,
        time_to_next_instruction: SignedDuration::ZERO,
    }
}
