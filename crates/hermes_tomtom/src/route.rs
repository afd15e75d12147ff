use jiff::SignedDuration;
use serde::Serialize;

use crate::{
    coordinate::Coordinate,
    meters::Meters,
    reply::RouteMetadata,
    request::{RouteRequest, TravelMode},
    segment::{Segment, SegmentRef},
    wire::WireSummary,
};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RouteLeg {
    leg_index: usize,
    distance: Meters,
    travel_time: SignedDuration,
    path: Vec<Coordinate>,
    segments: Vec<Segment>,
}

impl RouteLeg {
    pub fn leg_index(&self) -> usize {
        self.leg_index
    }

    pub fn distance(&self) -> Meters {
        self.distance
    }

    pub fn travel_time(&self) -> SignedDuration {
        self.travel_time
    }

    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }

    /// Segments of the leg, in traversal order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn first_segment(&self) -> Option<&Segment> {
        self.segments.first()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Route {
    legs: Vec<RouteLeg>,
    path: Vec<Coordinate>,
    distance: Meters,
    travel_time: SignedDuration,
    travel_mode: TravelMode,
    first_segment: SegmentRef,
    pub(crate) metadata: RouteMetadata,
    #[serde(skip)]
    request: RouteRequest,
}

impl Route {
    pub fn legs(&self) -> &[RouteLeg] {
        &self.legs
    }

    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }

    /// Total length, as reported by the service.
    pub fn distance(&self) -> Meters {
        self.distance
    }

    /// Total travel time, as reported by the service.
    pub fn travel_time(&self) -> SignedDuration {
        self.travel_time
    }

    pub fn travel_mode(&self) -> TravelMode {
        self.travel_mode
    }

    pub fn request(&self) -> &RouteRequest {
        &self.request
    }

    /// Engine name, plus the raw reply and query url when the engine
    /// parameters ask for them.
    pub fn metadata(&self) -> &RouteMetadata {
        &self.metadata
    }

    pub fn first_segment(&self) -> &Segment {
        self.segment(self.first_segment)
    }

    pub fn segment(&self, segment: SegmentRef) -> &Segment {
        &self.legs[segment.leg].segments[segment.index]
    }

    /// Follows the segment chain from the first segment of the route.
    pub fn segments(&self) -> SegmentIter<'_> {
        SegmentIter {
            route: self,
            next: Some(self.first_segment),
        }
    }

    pub fn line_string(&self) -> geo_types::LineString<f64> {
        geo_types::LineString::new(
            self.path
                .iter()
                .map(geo_types::Coord::<f64>::from)
                .collect(),
        )
    }
}

pub struct SegmentIter<'a> {
    route: &'a Route,
    next: Option<SegmentRef>,
}

impl<'a> Iterator for SegmentIter<'a> {
    type Item = (SegmentRef, &'a Segment);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let segment = self.route.segment(current);
        self.next = segment.next();

        Some((current, segment))
    }
}

/// Stitches the segment chains of every leg into a route.
pub(crate) struct RouteAssembler<'a> {
    summary: WireSummary,
    request: &'a RouteRequest,
}

impl<'a> RouteAssembler<'a> {
    pub fn new(summary: WireSummary, request: &'a RouteRequest) -> Self {
        RouteAssembler { summary, request }
    }

    /// `legs_geometry`, `legs_summary` and `legs_segments` are indexed by leg.
    pub fn assemble(
        self,
        legs_geometry: Vec<Vec<Coordinate>>,
        legs_summary: Vec<WireSummary>,
        mut legs_segments: Vec<Vec<Segment>>,
    ) -> Route {
        link_segments(&mut legs_segments);

        let path = legs_geometry.iter().flatten().copied().collect();

        let legs = legs_geometry
            .into_iter()
            .zip(legs_summary)
            .zip(legs_segments)
            .enumerate()
            .map(|(leg_index, ((path, summary), segments))| RouteLeg {
                leg_index,
                distance: Meters::from(summary.length_in_meters),
                travel_time: SignedDuration::from_secs(summary.travel_time_in_seconds),
                path,
                segments,
            })
            .collect();

        Route {
            legs,
            path,
            distance: Meters::from(self.summary.length_in_meters),
            travel_time: SignedDuration::from_secs(self.summary.travel_time_in_seconds),
            travel_mode: self.request.travel_mode(),
            first_segment: SegmentRef { leg: 0, index: 0 },
            metadata: RouteMetadata::default(),
            request: self.request.clone(),
        }
    }
}

/// Points every segment to its successor, crossing leg boundaries.
fn link_segments(legs_segments: &mut [Vec<Segment>]) {
    let refs: Vec<SegmentRef> = legs_segments
        .iter()
        .enumerate()
        .flat_map(|(leg, segments)| {
            (0..segments.len()).map(move |index| SegmentRef { leg, index })
        })
        .collect();

    for window in refs.windows(2) {
        let (current, next) = (window[0], window[1]);
        legs_segments[current.leg][current.index].next = Some(next);
    }

    if let Some(last) = refs.last() {
        legs_segments[last.leg][last.index].next = None;
    }
}
