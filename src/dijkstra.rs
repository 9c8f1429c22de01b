use hashbrown::{HashMap, HashSet};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use crate::graph::WeightedGraph;

#[derive(Copy, Clone, PartialEq)]
struct State<V> {
    cost: f64,
    vertex: V,
}

// Min-heap by cost
impl<V: PartialEq> Eq for State<V> {}

impl<V: PartialEq> Ord for State<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        // reverse ordering for min-heap
        other.cost.partial_cmp(&self.cost).unwrap_or(Ordering::Equal)
    }
}

impl<V: PartialEq> PartialOrd for State<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra from `source` to `target`, refusing to pass through `excluded`
/// vertices as intermediate hops (the target itself is always allowed, even
/// when excluded). Returns the path inclusive of both endpoints, or an empty
/// Vec when the target is unreachable under those constraints.
///
/// Stale heap entries are skipped on pop rather than removed on update: an
/// entry is stale exactly when a strictly cheaper entry for the same vertex
/// already updated the distance table.
pub fn shortest_path<V>(
    graph: &WeightedGraph<V, f64>,
    source: V,
    target: V,
    excluded: &HashSet<V>,
) -> Vec<V>
where
    V: Copy + Eq + Hash,
{
    if source == target {
        return vec![target];
    }

    let mut dist: HashMap<V, f64> = HashMap::new();
    let mut prev: HashMap<V, V> = HashMap::new();
    let mut heap = BinaryHeap::new();

    dist.insert(source, 0.0);
    heap.push(State {
        cost: 0.0,
        vertex: source,
    });

    while let Some(State { cost, vertex }) = heap.pop() {
        if cost > *dist.get(&vertex).unwrap_or(&f64::INFINITY) {
            continue;
        }
        if vertex == target {
            break;
        }
        for next in graph.neighbors(vertex) {
            if excluded.contains(&next) && next != target {
                continue;
            }
            let weight = match graph.weight(vertex, next) {
                Some(w) if w.is_finite() => w,
                _ => continue,
            };
            let next_cost = cost + weight;
            if next_cost < *dist.get(&next).unwrap_or(&f64::INFINITY) {
                dist.insert(next, next_cost);
                prev.insert(next, vertex);
                heap.push(State {
                    cost: next_cost,
                    vertex: next,
                });
            }
        }
    }

    if !prev.contains_key(&target) {
        return Vec::new();
    }

    let mut path = vec![target];
    let mut current = target;
    while current != source {
        match prev.get(&current) {
            Some(&p) => {
                path.push(p);
                current = p;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}

/// Sum of the edge weights along `path`. None if some consecutive pair has
/// no stored edge; that never happens for a path produced by
/// `shortest_path`, which only ever follows traversed edges.
pub fn path_length<V>(graph: &WeightedGraph<V, f64>, path: &[V]) -> Option<f64>
where
    V: Copy + Eq + Hash,
{
    let mut total = 0.0;
    for pair in path.windows(2) {
        total += graph.weight(pair[0], pair[1])?;
    }
    Some(total)
}
