use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate as echoed by the routing service.
///
/// Equality is exact: the service repeats the very same floating values for
/// points shared between the leg geometry and the guidance instructions.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn lat(&self) -> f64 {
        self.latitude
    }

    pub fn lon(&self) -> f64 {
        self.longitude
    }

    pub(crate) fn key(&self) -> CoordinateKey {
        CoordinateKey {
            // -0.0 and 0.0 compare equal, total_cmp does not
            latitude: self.latitude + 0.0,
            longitude: self.longitude + 0.0,
        }
    }
}

impl From<&Coordinate> for geo_types::Point<f64> {
    fn from(coordinate: &Coordinate) -> Self {
        geo_types::Point::new(coordinate.longitude, coordinate.latitude)
    }
}

impl From<&Coordinate> for geo_types::Coord<f64> {
    fn from(coordinate: &Coordinate) -> Self {
        geo_types::Coord {
            x: coordinate.longitude,
            y: coordinate.latitude,
        }
    }
}

/// Ordered key for coordinate lookups, lexicographic by (latitude, longitude).
#[derive(Debug, Clone, Copy)]
pub(crate) struct CoordinateKey {
    latitude: f64,
    longitude: f64,
}

impl PartialEq for CoordinateKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CoordinateKey {}

impl PartialOrd for CoordinateKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CoordinateKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.latitude
            .total_cmp(&other.latitude)
            .then_with(|| self.longitude.total_cmp(&other.longitude))
    }
}
