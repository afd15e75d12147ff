use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    #[default]
    Car,
    Pedestrian,
    Bicycle,
    PublicTransit,
    Truck,
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TravelMode::Car => "car",
                TravelMode::Pedestrian => "pedestrian",
                TravelMode::Bicycle => "bicycle",
                TravelMode::PublicTransit => "bus",
                TravelMode::Truck => "truck",
            }
        )
    }
}

/// What the caller asked the routing service for.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub number_alternative_routes: usize,
    pub travel_modes: Vec<TravelMode>,
}

impl RouteRequest {
    /// Routes are tagged with the first requested travel mode.
    pub fn travel_mode(&self) -> TravelMode {
        self.travel_modes.first().copied().unwrap_or_default()
    }

    /// Upper bound on the number of routes handed back: the main route plus
    /// the requested alternatives.
    pub fn max_routes(&self) -> usize {
        self.number_alternative_routes.saturating_add(1)
    }
}

impl Default for RouteRequest {
    fn default() -> Self {
        RouteRequest {
            number_alternative_routes: 0,
            travel_modes: vec![TravelMode::Car],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_travel_mode_names() {
        assert_eq!(TravelMode::PublicTransit.to_string(), "bus");
        assert_eq!(TravelMode::Pedestrian.to_string(), "pedestrian");
    }

    #[test]
    fn test_travel_mode_defaults_to_car() {
        let request = RouteRequest {
            number_alternative_routes: 2,
            travel_modes: vec![],
        };

        assert_eq!(request.travel_mode(), TravelMode::Car);
        assert_eq!(request.max_routes(), 3);
    }

    #[test]
    fn test_first_travel_mode_wins() {
        let request = RouteRequest {
            number_alternative_routes: 0,
            travel_modes: vec![TravelMode::Truck, TravelMode::Car],
        };

        assert_eq!(request.travel_mode(), TravelMode::Truck);
    }
}
