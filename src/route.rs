use hashbrown::HashSet;
use std::hash::Hash;

use crate::dijkstra::{path_length, shortest_path};
use crate::graph::WeightedGraph;

/// One person's walk to the meeting target.
#[derive(Clone, Debug, PartialEq)]
pub struct Route<V> {
    /// Vertex sequence from that person's start to the target, inclusive.
    /// Empty when the target is unreachable.
    pub path: Vec<V>,
    /// Total weight along `path`; None when the route does not exist.
    pub length: Option<f64>,
}

impl<V> Route<V> {
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MeetingRoutes<V> {
    pub a: Route<V>,
    pub b: Route<V>,
}

impl<V> MeetingRoutes<V> {
    /// Both people can actually get to the meeting target.
    pub fn both_reachable(&self) -> bool {
        self.a.is_reachable() && self.b.is_reachable()
    }
}

fn route_to<V>(
    graph: &WeightedGraph<V, f64>,
    from: V,
    target: V,
    excluded: &HashSet<V>,
) -> Route<V>
where
    V: Copy + Eq + Hash,
{
    let path = shortest_path(graph, from, target, excluded);
    let length = if path.is_empty() {
        None
    } else {
        path_length(graph, &path)
    };
    Route { path, length }
}

/// Route both people to a meeting target chosen by the caller (typically the
/// building nearest the geographic midpoint of the two). The two searches
/// are independent and share the same exclusion set.
pub fn meeting_routes<V>(
    graph: &WeightedGraph<V, f64>,
    person_a: V,
    person_b: V,
    target: V,
    excluded: &HashSet<V>,
) -> MeetingRoutes<V>
where
    V: Copy + Eq + Hash,
{
    MeetingRoutes {
        a: route_to(graph, person_a, target, excluded),
        b: route_to(graph, person_b, target, excluded),
    }
}
