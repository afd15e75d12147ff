use tracing::{debug, warn};

use crate::{
    coordinate::Coordinate,
    coordinate_index::CoordinateIndex,
    error::DecodeError,
    wire::{Instruction, InstructionType},
};

/// Appends the arrival point to the last leg when the service left it out of
/// the geometry. Returns whether the geometry was changed.
pub(crate) fn repair_tail(legs_geometry: &mut [Vec<Coordinate>], arrival: &Coordinate) -> bool {
    let Some(last_leg) = legs_geometry.last_mut() else {
        return false;
    };

    if last_leg.last() == Some(arrival) {
        return false;
    }

    debug!(
        "Appending arrival point {},{} to the route geometry",
        arrival.lat(),
        arrival.lon()
    );
    last_leg.push(*arrival);
    true
}

/// Synthesizes a DEPART instruction on the leg head when the next instruction
/// doesn't start there. `previous` is the instruction that reached the
/// waypoint.
pub(crate) fn repair_leg_head(
    leg_head: &Coordinate,
    next: &Instruction,
    previous: &Instruction,
) -> Option<Instruction> {
    if next.point == *leg_head {
        return None;
    }

    Some(Instruction::depart_from_waypoint(*leg_head, previous))
}

pub struct InstructionAligner<'a> {
    index: &'a CoordinateIndex,
}

impl<'a> InstructionAligner<'a> {
    pub fn new(index: &'a CoordinateIndex) -> Self {
        InstructionAligner { index }
    }

    /// Drops the instructions that can't be placed on the geometry and checks
    /// that the remaining ones follow the path.
    pub fn align(&self, instructions: Vec<Instruction>) -> Result<Vec<Instruction>, DecodeError> {
        let instructions = self.drop_unmatched(instructions);

        if instructions.len() < 2 {
            warn!("Not enough instructions");
            return Err(DecodeError::NotEnoughInstructions);
        }

        self.check_departure(&instructions[0])?;
        self.check_sequentiality(&instructions)?;

        Ok(instructions)
    }

    fn drop_unmatched(&self, instructions: Vec<Instruction>) -> Vec<Instruction> {
        let count = instructions.len();

        instructions
            .into_iter()
            .enumerate()
            .filter(|(position, instruction)| {
                // The arrival is kept, it may not sit on the leg geometry
                if *position + 1 == count {
                    return true;
                }

                let found = self.index.leg_containing(&instruction.point).is_some();
                if !found {
                    debug!(
                        "Dropping instruction {} ({:?}, {:?}) off the geometry",
                        position, instruction.maneuver, instruction.instruction_type
                    );
                }
                found
            })
            .map(|(_, instruction)| instruction)
            .collect()
    }

    fn check_departure(&self, first: &Instruction) -> Result<(), DecodeError> {
        if self.index.path().first() != Some(&first.point) {
            return Err(DecodeError::DepartureMismatch);
        }

        match first.instruction_type {
            None | Some(InstructionType::LocationDeparture) => {}
            Some(instruction_type) => {
                debug!("First instruction has type {:?}", instruction_type)
            }
        }

        Ok(())
    }

    fn check_sequentiality(&self, instructions: &[Instruction]) -> Result<(), DecodeError> {
        let mut previous = 0;

        for instruction in &instructions[1..] {
            match self.index.locate_in_route(&instruction.point, previous) {
                Some(current) if current >= previous => previous = current,
                current => {
                    warn!(
                        "Instructions out of geographical order {} {:?}",
                        previous, current
                    );
                    return Err(DecodeError::OutOfOrder { previous, current });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::DecodeErrorKind,
        test_utils::{c, instruction},
        wire::ManeuverKind,
    };

    use super::*;

    fn create_legs() -> Vec<Vec<Coordinate>> {
        vec![
            vec![c(0.0, 0.0), c(0.0, 1.0), c(0.0, 2.0)],
            vec![c(0.0, 2.0), c(0.0, 3.0), c(0.0, 4.0)],
        ]
    }

    #[test]
    fn test_repair_tail_appends_missing_arrival() {
        let mut legs = create_legs();

        assert!(repair_tail(&mut legs, &c(0.0, 5.0)));
        assert_eq!(legs[1].len(), 4);
        assert_eq!(legs[1].last(), Some(&c(0.0, 5.0)));
        assert_eq!(legs[0].len(), 3);
    }

    #[test]
    fn test_repair_tail_keeps_matching_arrival() {
        let mut legs = create_legs();

        assert!(!repair_tail(&mut legs, &c(0.0, 4.0)));
        assert_eq!(legs[1].len(), 3);
    }

    #[test]
    fn test_repair_leg_head() {
        let previous = instruction(c(0.0, 2.0), ManeuverKind::WaypointReached, 200, 20);
        let next = instruction(c(0.0, 3.0), ManeuverKind::TurnLeft, 300, 30);

        let depart = repair_leg_head(&c(0.0, 2.0), &next, &previous).unwrap();

        assert_eq!(depart.point, c(0.0, 2.0));
        assert_eq!(depart.maneuver, ManeuverKind::Depart);
        assert_eq!(depart.route_offset_in_meters, 200);
        assert_eq!(depart.travel_time_in_seconds, 20);
        assert_eq!(depart.message, "Depart from waypoint");

        assert!(repair_leg_head(&c(0.0, 3.0), &next, &previous).is_none());
    }

    #[test]
    fn test_align_drops_unmatched_instructions() {
        let index = CoordinateIndex::new(&create_legs());
        let instructions = vec![
            instruction(c(0.0, 0.0), ManeuverKind::Depart, 0, 0),
            instruction(c(7.0, 7.0), ManeuverKind::Straight, 50, 5),
            instruction(c(0.0, 1.0), ManeuverKind::TurnLeft, 100, 10),
            instruction(c(8.0, 8.0), ManeuverKind::TryMakeUturn, 150, 15),
            instruction(c(0.0, 4.0), ManeuverKind::Arrive, 400, 40),
        ];

        let aligned = InstructionAligner::new(&index).align(instructions).unwrap();

        assert_eq!(aligned.len(), 3);
        assert_eq!(aligned[1].point, c(0.0, 1.0));
        assert_eq!(aligned[2].maneuver, ManeuverKind::Arrive);
    }

    #[test]
    fn test_align_keeps_unmatched_arrival() {
        let mut legs = create_legs();
        repair_tail(&mut legs, &c(0.0, 5.0));
        let index = CoordinateIndex::new(&legs);
        let instructions = vec![
            instruction(c(0.0, 0.0), ManeuverKind::Depart, 0, 0),
            instruction(c(0.0, 5.0), ManeuverKind::Arrive, 500, 50),
        ];

        let aligned = InstructionAligner::new(&index).align(instructions).unwrap();

        assert_eq!(aligned.len(), 2);
    }

    #[test]
    fn test_align_not_enough_instructions() {
        let index = CoordinateIndex::new(&create_legs());
        let instructions = vec![
            instruction(c(9.0, 9.0), ManeuverKind::Depart, 0, 0),
            instruction(c(0.0, 4.0), ManeuverKind::Arrive, 400, 40),
        ];

        let error = InstructionAligner::new(&index)
            .align(instructions)
            .unwrap_err();

        assert!(matches!(error, DecodeError::NotEnoughInstructions));
        assert_eq!(error.kind(), DecodeErrorKind::Alignment);
    }

    #[test]
    fn test_align_departure_mismatch() {
        let index = CoordinateIndex::new(&create_legs());
        let instructions = vec![
            instruction(c(0.0, 1.0), ManeuverKind::Depart, 0, 0),
            instruction(c(0.0, 4.0), ManeuverKind::Arrive, 400, 40),
        ];

        let error = InstructionAligner::new(&index)
            .align(instructions)
            .unwrap_err();

        assert!(matches!(error, DecodeError::DepartureMismatch));
    }

    #[test]
    fn test_align_out_of_order() {
        let index = CoordinateIndex::new(&create_legs());
        let instructions = vec![
            instruction(c(0.0, 0.0), ManeuverKind::Depart, 0, 0),
            instruction(c(0.0, 3.0), ManeuverKind::TurnLeft, 300, 30),
            instruction(c(0.0, 1.0), ManeuverKind::TurnRight, 100, 10),
            instruction(c(0.0, 4.0), ManeuverKind::Arrive, 400, 40),
        ];

        let error = InstructionAligner::new(&index)
            .align(instructions)
            .unwrap_err();

        assert!(matches!(
            error,
            DecodeError::OutOfOrder {
                previous: 4,
                current: None
            }
        ));
    }

    #[test]
    fn test_align_accepts_repeated_points() {
        let index = CoordinateIndex::new(&create_legs());
        let instructions = vec![
            instruction(c(0.0, 0.0), ManeuverKind::Depart, 0, 0),
            instruction(c(0.0, 2.0), ManeuverKind::WaypointReached, 200, 20),
            instruction(c(0.0, 2.0), ManeuverKind::Depart, 200, 20),
            instruction(c(0.0, 4.0), ManeuverKind::Arrive, 400, 40),
        ];

        assert!(InstructionAligner::new(&index).align(instructions).is_ok());
    }
}
