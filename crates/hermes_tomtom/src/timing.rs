use jiff::SignedDuration;

use crate::{meters::Meters, segment::Segment, segment_builder::PendingSegment};

/// Converts cumulative (offset, elapsed) pairs into the distance and time
/// travelled since the previous pair. The first pair is measured from zero.
pub(crate) fn to_incremental(
    cumulative: impl IntoIterator<Item = (Meters, SignedDuration)>,
) -> Vec<(Meters, SignedDuration)> {
    let mut previous = (Meters::ZERO, SignedDuration::ZERO);

    cumulative
        .into_iter()
        .map(|(offset, elapsed)| {
            let increment = (offset - previous.0, elapsed - previous.1);
            previous = (offset, elapsed);
            increment
        })
        .collect()
}

/// Turns the cumulative measurements of the pending segments into the
/// distance and time of each segment.
///
/// The service reports how far an instruction is from the route origin, so
/// the increment computed at instruction N is the stretch travelled to reach
/// it. The maneuver describes what happens from N onwards, so every segment
/// then takes the increment of the segment following it in its leg. The last
/// segment of each leg is the arrival and gets zero.
pub(crate) fn normalize(legs_segments: Vec<Vec<PendingSegment>>) -> Vec<Vec<Segment>> {
    let increments = to_incremental(
        legs_segments
            .iter()
            .flatten()
            .map(|segment| (segment.route_offset, segment.elapsed)),
    );
    let mut increments = increments.into_iter();

    legs_segments
        .into_iter()
        .map(|pending| {
            let leg_increments: Vec<_> = increments.by_ref().take(pending.len()).collect();

            pending
                .into_iter()
                .enumerate()
                .map(|(index, pending)| {
                    let (distance, travel_time) = leg_increments
                        .get(index + 1)
                        .copied()
                        .unwrap_or((Meters::ZERO, SignedDuration::ZERO));

                    let mut maneuver = pending.maneuver;
                    maneuver.distance_to_next_instruction = distance;
                    maneuver.time_to_next_instruction = travel_time;

                    Segment {
                        path: pending.path,
                        distance,
                        travel_time,
                        maneuver,
                        next: None,
                        is_leg_last_segment: pending.is_leg_last_segment,
                    }
                })
                .collect()
        })
        .collect()
}
