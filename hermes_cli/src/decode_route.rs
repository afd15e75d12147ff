use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, ValueEnum};
use comfy_table::Table;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry};
use hermes_tomtom::{
    params::RoutingEngineParams,
    reply::RouteReply,
    request::{RouteRequest, TravelMode},
    route::Route,
};
use rayon::prelude::*;
use serde_json::json;
use tracing::{error, info};

use crate::{file_utils::read_json_files, parsers};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Geojson,
}

#[derive(Args)]
pub struct DecodeRouteArgs {
    /// A reply file, or a folder of replies
    #[arg(short, long)]
    input: PathBuf,

    /// The number of alternative routes that were requested
    #[arg(short, long, default_value_t = 0)]
    alternatives: usize,

    #[arg(short, long, value_parser = parsers::parse_travel_mode, default_value = "car")]
    travel_mode: TravelMode,

    /// Engine parameter map, as a json object (e.g. {"tomtom.routing.include_json": true})
    #[arg(short, long)]
    params: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

pub fn run(args: DecodeRouteArgs) -> Result<(), anyhow::Error> {
    let paths = if args.input.is_file() {
        vec![args.input.clone()]
    } else {
        read_json_files(&args.input)?
    };

    let params = match &args.params {
        Some(path) => read_params(path)?,
        None => RoutingEngineParams::default(),
    };

    let request = RouteRequest {
        number_alternative_routes: args.alternatives,
        travel_modes: vec![args.travel_mode],
    };

    info!("Decoding {} replies", paths.len());

    let replies: Vec<(PathBuf, Result<RouteReply, anyhow::Error>)> = paths
        .into_par_iter()
        .map(|path| {
            let reply = decode_file(&path, &request, &params);
            (path, reply)
        })
        .collect();

    let mut failed = 0;
    let mut features = Vec::new();

    for (path, reply) in &replies {
        let reply = match reply {
            Ok(reply) => reply,
            Err(err) => {
                failed += 1;
                error!("{:#}", err);
                continue;
            }
        };

        match args.format {
            OutputFormat::Table => {
                info!("{}: {} routes", path.display(), reply.routes().len());
                for route in reply.routes() {
                    println!("{}", route_table(route));
                }
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(reply)?),
            OutputFormat::Geojson => features.extend(route_features(path, reply)),
        }
    }

    if args.format == OutputFormat::Geojson {
        let collection = GeoJson::FeatureCollection(FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        });
        println!("{}", collection);
    }

    if failed > 0 {
        anyhow::bail!("{} of {} replies could not be decoded", failed, replies.len());
    }

    Ok(())
}

fn read_params(path: &Path) -> Result<RoutingEngineParams, anyhow::Error> {
    let content = std::fs::read(path)
        .with_context(|| format!("Couldn't read parameters {}", path.display()))?;
    let parameters: serde_json::Value = serde_json::from_slice(&content)?;

    Ok(RoutingEngineParams::from_json(&parameters)?)
}

fn decode_file(
    path: &Path,
    request: &RouteRequest,
    params: &RoutingEngineParams,
) -> Result<RouteReply, anyhow::Error> {
    let bytes = std::fs::read(path).with_context(|| format!("Couldn't read {}", path.display()))?;

    RouteReply::new(&bytes, None, request, params)
        .with_context(|| format!("Couldn't decode {}", path.display()))
}

fn route_table(route: &Route) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Leg",
        "Segment",
        "Direction",
        "Instruction",
        "Distance (m)",
        "Time",
        "Points",
    ]);

    for (segment_ref, segment) in route.segments() {
        let maneuver = segment.maneuver();
        table.add_row(vec![
            segment_ref.leg.to_string(),
            segment_ref.index.to_string(),
            format!("{:?}", maneuver.direction()),
            maneuver.instruction_text().to_owned(),
            format!("{:.0}", segment.distance().value()),
            format!("{:#}", segment.travel_time()),
            segment.path().len().to_string(),
        ]);
    }

    table
}

/// One line string per route, and one point per maneuver.
fn route_features(path: &Path, reply: &RouteReply) -> Vec<Feature> {
    let mut features = Vec::new();

    for (route_index, route) in reply.routes().iter().enumerate() {
        features.push(Feature {
            bbox: None,
            geometry: Some(Geometry::new(geojson::Value::from(&route.line_string()))),
            id: None,
            properties: json!({
                "file": path.display().to_string(),
                "route": route_index,
                "engine": route.metadata().engine_name,
                "travel_mode": route.travel_mode().to_string(),
                "distance": route.distance().value(),
                "travel_time": route.travel_time().as_secs(),
            })
            .as_object()
            .cloned(),
            foreign_members: None,
        });

        for (_, segment) in route.segments() {
            let maneuver = segment.maneuver();
            let position = maneuver.position();

            features.push(Feature {
                bbox: None,
                geometry: Some(Geometry::new(geojson::Value::Point(vec![
                    position.lon(),
                    position.lat(),
                ]))),
                id: None,
                properties: json!({
                    "route": route_index,
                    "direction": maneuver.direction(),
                    "instruction": maneuver.instruction_text(),
                    "distance_to_next_instruction": maneuver.distance_to_next_instruction().value(),
                    "time_to_next_instruction": maneuver.time_to_next_instruction().as_secs(),
                })
                .as_object()
                .cloned(),
                foreign_members: None,
            });
        }
    }

    features
}
