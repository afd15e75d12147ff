use serde::Deserialize;

/// Parameters of the TomTom routing engine, as found in the service provider
/// parameter map.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutingEngineParams {
    /// Keep the raw reply in the reply metadata
    #[serde(rename = "tomtom.routing.include_json", default)]
    pub include_json: bool,

    /// Keep the query url in the reply metadata
    #[serde(rename = "tomtom.routing.debug_query", default)]
    pub debug_query: bool,
}

impl RoutingEngineParams {
    pub fn from_json(parameters: &serde_json::Value) -> Result<Self, serde_json::Error> {
        RoutingEngineParams::deserialize(parameters)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_from_parameter_map() {
        let params = RoutingEngineParams::from_json(&json!({
            "tomtom.access_token": "secret",
            "tomtom.routing.include_json": true,
        }))
        .unwrap();

        assert!(params.include_json);
        assert!(!params.debug_query);
    }

    #[test]
    fn test_defaults() {
        let params = RoutingEngineParams::from_json(&json!({})).unwrap();

        assert_eq!(params, RoutingEngineParams::default());
    }

    #[test]
    fn test_invalid_value() {
        assert!(
            RoutingEngineParams::from_json(&json!({ "tomtom.routing.debug_query": "yes" }))
                .is_err()
        );
    }
}
