use anyhow::{anyhow, Result};
use clap::Parser;

mod campus;
mod dijkstra;
mod geo;
mod graph;
mod route;

use campus::{Campus, CampusMap};

#[derive(Parser, Debug)]
#[command(name = "meet")]
#[command(about = "Pick a meeting building between two people on a campus map and route both of them there.", long_about = None)]
struct Cli {
    /// Path to the campus .json map file
    #[arg(short, long)]
    map: String,

    /// Person 1's building (abbreviation or partial name)
    #[arg(long)]
    person1: String,

    /// Person 2's building (abbreviation or partial name)
    #[arg(long)]
    person2: String,

    /// Connect buildings to waypoints within this many meters
    #[arg(long, default_value_t = campus::DEFAULT_SNAP_METERS)]
    snap_distance: f64,
}

fn print_route(label: &str, route: &route::Route<i64>) {
    match route.length {
        Some(length) => {
            println!("{}'s distance to dest: {:.1} m", label, length);
            let hops: Vec<String> = route.path.iter().map(|id| id.to_string()).collect();
            println!("Path: {}", hops.join("->"));
        }
        None => println!(
            "{} is unable to reach the destination building. Is an edge missing?",
            label
        ),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let map = CampusMap::load(&cli.map)?;
    tracing::info!(
        buildings = map.buildings.len(),
        waypoints = map.waypoints.len(),
        footways = map.footways.len(),
        "loaded campus map"
    );

    let campus = Campus::build(map, cli.snap_distance);
    tracing::info!(
        vertices = campus.graph.vertex_count(),
        edges = campus.graph.edge_count(),
        "built walking graph"
    );

    let p1 = campus
        .find_building(&cli.person1)
        .ok_or_else(|| anyhow!("person 1's building not found: {:?}", cli.person1))?
        .clone();
    let p2 = campus
        .find_building(&cli.person2)
        .ok_or_else(|| anyhow!("person 2's building not found: {:?}", cli.person2))?
        .clone();

    let (mid_lat, mid_lon) = geo::midpoint(p1.lat, p1.lon, p2.lat, p2.lon);
    let dest = campus
        .closest_building(mid_lat, mid_lon)
        .ok_or_else(|| anyhow!("campus map has no buildings"))?
        .clone();

    println!("Person 1: {} ({}) at ({}, {})", p1.name, p1.abbr, p1.lat, p1.lon);
    println!("Person 2: {} ({}) at ({}, {})", p2.name, p2.abbr, p2.lat, p2.lon);
    println!("Destination: {} ({}) at ({}, {})", dest.name, dest.abbr, dest.lat, dest.lon);

    let routes = route::meeting_routes(
        &campus.graph,
        p1.id,
        p2.id,
        dest.id,
        &campus.building_ids(),
    );

    print_route("Person 1", &routes.a);
    print_route("Person 2", &routes.b);

    Ok(())
}
