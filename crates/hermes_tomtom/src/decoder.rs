use tracing::{debug, instrument, warn};

use crate::{
    aligner::{InstructionAligner, repair_tail},
    coordinate::Coordinate,
    coordinate_index::CoordinateIndex,
    error::{DecodeError, DecodeErrorKind},
    request::RouteRequest,
    route::{Route, RouteAssembler},
    segment_builder::SegmentBuilder,
    timing,
    wire::{WireResponse, WireRoute, WireSummary},
};

/// Decodes a TomTom calculate-route reply into routes.
///
/// A reply that doesn't have the expected shape fails as a whole. A route
/// whose instructions can't be reconciled with its geometry is skipped; the
/// error is only returned when no route could be decoded at all. At most
/// `request.number_alternative_routes + 1` routes are returned, in the order
/// of the reply.
#[instrument(skip_all, level = "debug")]
pub fn decode(bytes: &[u8], request: &RouteRequest) -> Result<Vec<Route>, DecodeError> {
    let response = WireResponse::from_slice(bytes)?;
    decode_response(response, request)
}

pub(crate) fn decode_response(
    response: WireResponse,
    request: &RouteRequest,
) -> Result<Vec<Route>, DecodeError> {
    let count = response.routes.len();
    let mut routes = Vec::with_capacity(count);
    let mut first_error = None;

    for (route_index, wire_route) in response.routes.into_iter().enumerate() {
        match decode_route(route_index, wire_route, request) {
            Ok(route) => routes.push(route),
            Err(error) if error.kind() == DecodeErrorKind::Structural => return Err(error),
            Err(error) => {
                warn!("Skipping route {}/{}: {}", route_index + 1, count, error);
                first_error.get_or_insert(error);
            }
        }
    }

    if let Some(error) = first_error.filter(|_| routes.is_empty()) {
        return Err(error);
    }

    routes.truncate(request.max_routes());
    debug!("Decoded {} of {} routes", routes.len(), count);

    Ok(routes)
}

fn decode_route(
    route_index: usize,
    wire_route: WireRoute,
    request: &RouteRequest,
) -> Result<Route, DecodeError> {
    let WireRoute {
        summary,
        legs,
        guidance,
    } = wire_route;
    let instructions = guidance.instructions;

    if legs.is_empty() {
        return Err(DecodeError::NoLegs { route: route_index });
    }

    if let Some(leg) = legs.iter().position(|leg| leg.points.is_empty()) {
        return Err(DecodeError::EmptyLeg {
            route: route_index,
            leg,
        });
    }

    let arrival = instructions
        .last()
        .map(|instruction| instruction.point)
        .ok_or(DecodeError::NotEnoughInstructions)?;

    let (mut legs_geometry, legs_summary): (Vec<Vec<Coordinate>>, Vec<WireSummary>) = legs
        .into_iter()
        .map(|leg| (leg.points, leg.summary))
        .unzip();

    repair_tail(&mut legs_geometry, &arrival);

    let index = CoordinateIndex::new(&legs_geometry);
    let instructions = InstructionAligner::new(&index).align(instructions)?;
    let pending = SegmentBuilder::new(&legs_geometry, &index).build(&instructions)?;
    let legs_segments = timing::normalize(pending);

    Ok(RouteAssembler::new(summary, request).assemble(legs_geometry, legs_summary, legs_segments))
}
