use anyhow::{Context, Result};
use fnv::FnvHashMap;
use hashbrown::HashSet;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::geo;
use crate::graph::WeightedGraph;

/// Connect a building to every footway waypoint closer than this many
/// meters. Tuned against the reference campus map; override with
/// `--snap-distance` for other maps.
pub const DEFAULT_SNAP_METERS: f64 = 58.0;

#[derive(Clone, Debug, Deserialize)]
pub struct Building {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    pub name: String,
    pub abbr: String,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Waypoint {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
}

/// On-disk campus map layout: buildings, footway waypoints, and footways
/// as sequences of waypoint ids.
#[derive(Debug, Deserialize)]
pub struct CampusMap {
    pub buildings: Vec<Building>,
    pub waypoints: Vec<Waypoint>,
    pub footways: Vec<Vec<i64>>,
}

impl CampusMap {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("opening {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// The routable campus: the walking graph plus the building/coordinate
/// lookups the route handlers need. Built once at startup; read-only after.
pub struct Campus {
    pub graph: WeightedGraph<i64, f64>,
    pub buildings: Vec<Building>,
}

impl Campus {
    /// Vertices: every building and waypoint. Edges: each building is tied
    /// to all waypoints within `snap_meters` of it, and consecutive
    /// waypoints along each footway are linked, always in both directions,
    /// weighted by haversine distance. Footway references to unknown
    /// waypoint ids contribute no edges.
    pub fn build(map: CampusMap, snap_meters: f64) -> Self {
        let mut graph = WeightedGraph::new();

        let mut coords: FnvHashMap<i64, (f64, f64)> = FnvHashMap::default();
        for wp in &map.waypoints {
            coords.insert(wp.id, (wp.lat, wp.lon));
            graph.add_vertex(wp.id);
        }
        for b in &map.buildings {
            graph.add_vertex(b.id);
        }

        for b in &map.buildings {
            for (&wp_id, &(wp_lat, wp_lon)) in coords.iter() {
                let d = geo::haversine_meters(b.lat, b.lon, wp_lat, wp_lon);
                if d < snap_meters {
                    graph.add_edge(b.id, wp_id, d);
                    graph.add_edge(wp_id, b.id, d);
                }
            }
        }

        let mut skipped_refs = 0usize;
        for footway in &map.footways {
            for pair in footway.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                let (&(alat, alon), &(blat, blon)) = match (coords.get(&a), coords.get(&b)) {
                    (Some(ca), Some(cb)) => (ca, cb),
                    _ => {
                        skipped_refs += 1;
                        continue;
                    }
                };
                let d = geo::haversine_meters(alat, alon, blat, blon);
                graph.add_edge(a, b, d);
                graph.add_edge(b, a, d);
            }
        }
        if skipped_refs > 0 {
            tracing::warn!(skipped_refs, "footway segments referenced unknown waypoints");
        }

        Self {
            graph,
            buildings: map.buildings,
        }
    }

    /// Find a building by exact abbreviation, else by the first
    /// substring-of-name match.
    pub fn find_building(&self, query: &str) -> Option<&Building> {
        for b in &self.buildings {
            if b.abbr == query {
                return Some(b);
            }
        }
        self.buildings.iter().find(|b| b.name.contains(query))
    }

    /// Building geographically nearest the given coordinate. None only when
    /// the map has no buildings at all.
    pub fn closest_building(&self, lat: f64, lon: f64) -> Option<&Building> {
        self.buildings.iter().min_by(|a, b| {
            let da = geo::haversine_meters(a.lat, a.lon, lat, lon);
            let db = geo::haversine_meters(b.lat, b.lon, lat, lon);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    /// Exclusion set for route queries: routes may start or end at a
    /// building but never pass through one.
    pub fn building_ids(&self) -> HashSet<i64> {
        self.buildings.iter().map(|b| b.id).collect()
    }
}
