use jiff::SignedDuration;
use serde::Serialize;

use crate::{coordinate::Coordinate, maneuver::Maneuver, meters::Meters};

/// Position of a segment inside a route: the leg owning it and its index in
/// that leg's chain.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentRef {
    pub leg: usize,
    pub index: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Segment {
    pub(crate) path: Vec<Coordinate>,
    pub(crate) distance: Meters,
    pub(crate) travel_time: SignedDuration,
    pub(crate) maneuver: Maneuver,
    pub(crate) next: Option<SegmentRef>,
    pub(crate) is_leg_last_segment: bool,
}

impl Segment {
    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }

    pub fn distance(&self) -> Meters {
        self.distance
    }

    pub fn travel_time(&self) -> SignedDuration {
        self.travel_time
    }

    pub fn maneuver(&self) -> &Maneuver {
        &self.maneuver
    }

    /// The following segment, possibly in the next leg. `None` on the last
    /// segment of the route.
    pub fn next(&self) -> Option<SegmentRef> {
        self.next
    }

    pub fn is_leg_last_segment(&self) -> bool {
        self.is_leg_last_segment
    }
}
