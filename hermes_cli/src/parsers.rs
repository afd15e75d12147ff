use hermes_tomtom::request::TravelMode;

pub fn parse_travel_mode(input: &str) -> Result<TravelMode, String> {
    match input.to_ascii_lowercase().as_str() {
        "car" => Ok(TravelMode::Car),
        "pedestrian" => Ok(TravelMode::Pedestrian),
        "bicycle" => Ok(TravelMode::Bicycle),
        "bus" | "public_transit" | "public-transit" => Ok(TravelMode::PublicTransit),
        "truck" => Ok(TravelMode::Truck),
        _ => Err(format!("Invalid travel mode {}", input)),
    }
}
