//! Transfer itineraries: walk, ride to a hub, change, ride on, walk.
//!
//! Hubs are picked by how many lines serve them. This is a rough proxy for
//! "major interchange": a stop with fewer lines can still be a perfectly
//! good place to change, and it is never considered here.

use std::cmp::Reverse;

use tracing::debug;

use crate::domain::{
    Coordinate, Endpoint, Itinerary, ItineraryKind, Overheads, Place, Stop, StopRef,
};

use super::config::PlannerConfig;
use super::connectivity::shared_lines;
use super::legs::{ride, walk};
use super::proximity::NearbyStop;

/// A stop eligible as a transfer point.
#[derive(Debug, Clone, Copy)]
pub struct Hub<'a> {
    pub stop: &'a Stop,
    pub location: Coordinate,
}

/// Collect the usable catalog stops served by at least `hub_min_lines` lines.
///
/// Stops tagged as hubs come first, then stops with more lines, then by id.
pub fn hub_candidates<'a>(catalog: &'a [Stop], config: &PlannerConfig) -> Vec<Hub<'a>> {
    let mut hubs: Vec<Hub<'a>> = catalog
        .iter()
        .filter(|stop| stop.served_lines.len() >= config.hub_min_lines)
        .filter_map(|stop| {
            stop.usable_location()
                .map(|location| Hub { stop, location })
        })
        .collect();

    hubs.sort_by_key(|hub| {
        (
            !hub.stop.is_hub(),
            Reverse(hub.stop.served_lines.len()),
            hub.stop.id.clone(),
        )
    });
    hubs
}

/// Build transfer itineraries between two nearby stops via `hubs`.
///
/// At most `max_transfer_hubs` itineraries are produced, taking hubs in the
/// order given. A hub qualifies when it shares a line with both stops.
pub fn build_transfers(
    origin: &Endpoint,
    destination: &Endpoint,
    board: &NearbyStop<'_>,
    alight: &NearbyStop<'_>,
    hubs: &[Hub<'_>],
    config: &PlannerConfig,
) -> Vec<Itinerary> {
    hubs.iter()
        .filter(|hub| hub.stop.id != board.stop.id && hub.stop.id != alight.stop.id)
        .filter_map(|hub| {
            let first = shared_lines(board.stop, hub.stop);
            let second = shared_lines(hub.stop, alight.stop);
            let (first_line, second_line) = (first.first()?, second.first()?);
            build_via(origin, destination, board, hub, alight, first_line, second_line, config)
        })
        .take(config.max_transfer_hubs)
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn build_via(
    origin: &Endpoint,
    destination: &Endpoint,
    board: &NearbyStop<'_>,
    hub: &Hub<'_>,
    alight: &NearbyStop<'_>,
    first_line: &str,
    second_line: &str,
    config: &PlannerConfig,
) -> Option<Itinerary> {
    let board_place = Place::Stop(StopRef::new(board.stop, board.location));
    let hub_place = Place::Stop(StopRef::new(hub.stop, hub.location));
    let alight_place = Place::Stop(StopRef::new(alight.stop, alight.location));

    let mut segments = Vec::with_capacity(4);
    segments.extend(walk(
        Place::Endpoint(origin.clone()),
        board_place.clone(),
        config,
    ));
    segments.push(ride(first_line, board_place, hub_place.clone(), config));
    segments.push(ride(second_line, hub_place, alight_place.clone(), config));
    segments.extend(walk(
        alight_place,
        Place::Endpoint(destination.clone()),
        config,
    ));

    let overheads = Overheads {
        headway: config.transfer_headway(),
        transfer_dwell: config.transfer_dwell(),
    };

    match Itinerary::new(ItineraryKind::Transfer, segments, overheads, config.transfer_fare) {
        Ok(itinerary) => Some(itinerary),
        Err(e) => {
            debug!(hub = %hub.stop.id, error = %e, "discarding transfer itinerary");
            None
        }
    }
}
