use serde::Serialize;

use crate::{
    decoder::decode_response, error::DecodeError, params::RoutingEngineParams,
    request::RouteRequest, route::Route, wire::WireResponse,
};

pub const ENGINE_NAME: &str = "tomtom";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RouteMetadata {
    pub engine_name: &'static str,

    /// Raw reply, when `tomtom.routing.include_json` is set
    pub reply_json: Option<String>,

    /// Query url, when `tomtom.routing.debug_query` is set
    pub query_url: Option<String>,
}

impl Default for RouteMetadata {
    fn default() -> Self {
        RouteMetadata {
            engine_name: ENGINE_NAME,
            reply_json: None,
            query_url: None,
        }
    }
}

/// The decoded answer to one route request. Every route carries the
/// metadata of the reply it came from.
#[derive(Serialize, Debug, Clone)]
pub struct RouteReply {
    routes: Vec<Route>,
}

impl RouteReply {
    pub fn new(
        bytes: &[u8],
        query_url: Option<&str>,
        request: &RouteRequest,
        params: &RoutingEngineParams,
    ) -> Result<Self, DecodeError> {
        let mut routes = decode_response(WireResponse::from_slice(bytes)?, request)?;

        let metadata = RouteMetadata {
            engine_name: ENGINE_NAME,
            reply_json: params
                .include_json
                .then(|| String::from_utf8_lossy(bytes).into_owned()),
            query_url: query_url
                .filter(|_| params.debug_query)
                .map(str::to_owned),
        };

        for route in &mut routes {
            route.metadata = metadata.clone();
        }

        Ok(RouteReply { routes })
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}
