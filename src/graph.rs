use hashbrown::hash_map::Entry;
use hashbrown::HashMap;
use std::hash::Hash;

/// Directed weighted graph over an adjacency map.
/// `V` is an opaque vertex id (the campus map uses i64), `W` an edge weight.
pub struct WeightedGraph<V, W> {
    adjacency: HashMap<V, HashMap<V, W>>,
    edge_count: usize,
}

impl<V, W> WeightedGraph<V, W>
where
    V: Copy + Eq + Hash,
    W: Copy,
{
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Register `v` with no outgoing edges. Returns false (and changes
    /// nothing) if it was already registered.
    pub fn add_vertex(&mut self, v: V) -> bool {
        match self.adjacency.entry(v) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(HashMap::new());
                true
            }
        }
    }

    /// Insert or overwrite the directed edge `from -> to`. Returns false
    /// without mutating anything if either endpoint is unregistered.
    /// Overwriting an existing edge does not change the edge count.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) -> bool {
        if !self.adjacency.contains_key(&to) {
            return false;
        }
        let out = match self.adjacency.get_mut(&from) {
            Some(out) => out,
            None => return false,
        };
        if out.insert(to, weight).is_none() {
            self.edge_count += 1;
        }
        true
    }

    /// Weight of the directed edge `from -> to`, or None if no such edge.
    /// A missing edge is never reported as a zero weight.
    pub fn weight(&self, from: V, to: V) -> Option<W> {
        self.adjacency.get(&from)?.get(&to).copied()
    }

    /// Out-neighbors of `from`, duplicate-free, in no particular order.
    /// Empty for an unregistered vertex.
    pub fn neighbors(&self, from: V) -> impl Iterator<Item = V> + '_ {
        self.adjacency
            .get(&from)
            .into_iter()
            .flat_map(|out| out.keys().copied())
    }

    /// All registered vertex ids, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<V, W> Default for WeightedGraph<V, W>
where
    V: Copy + Eq + Hash,
    W: Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_vertex_is_idempotent() {
        let mut g: WeightedGraph<i64, f64> = WeightedGraph::new();
        assert!(g.add_vertex(7));
        assert_eq!(g.vertex_count(), 1);
        assert!(!g.add_vertex(7));
        assert_eq!(g.vertex_count(), 1);
    }

    #[test]
    fn add_edge_then_lookup() {
        let mut g = WeightedGraph::new();
        g.add_vertex(1);
        g.add_vertex(2);
        assert!(g.add_edge(1, 2, 3.5));
        assert_eq!(g.weight(1, 2), Some(3.5));
        assert_eq!(g.edge_count(), 1);

        // Overwrite: weight changes, edge count does not.
        assert!(g.add_edge(1, 2, 9.0));
        assert_eq!(g.weight(1, 2), Some(9.0));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn edges_are_directed() {
        let mut g = WeightedGraph::new();
        g.add_vertex(1);
        g.add_vertex(2);
        g.add_edge(1, 2, 1.0);
        assert_eq!(g.weight(2, 1), None);
        assert_eq!(g.neighbors(2).count(), 0);
    }

    #[test]
    fn add_edge_rejects_unregistered_endpoints() {
        let mut g = WeightedGraph::new();
        g.add_vertex(1);
        assert!(!g.add_edge(1, 99, 1.0));
        assert!(!g.add_edge(99, 1, 1.0));
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.weight(1, 99), None);
    }

    #[test]
    fn neighbors_of_unregistered_vertex_is_empty() {
        let g: WeightedGraph<i64, f64> = WeightedGraph::new();
        assert_eq!(g.neighbors(42).count(), 0);
    }

    #[test]
    fn neighbors_are_duplicate_free() {
        let mut g = WeightedGraph::new();
        for v in [1, 2, 3] {
            g.add_vertex(v);
        }
        g.add_edge(1, 2, 1.0);
        g.add_edge(1, 2, 2.0);
        g.add_edge(1, 3, 1.0);
        let mut n: Vec<i64> = g.neighbors(1).collect();
        n.sort();
        assert_eq!(n, vec![2, 3]);
    }

    #[test]
    fn vertices_lists_everything_registered() {
        let mut g: WeightedGraph<i64, f64> = WeightedGraph::new();
        for v in [5, 6, 7] {
            g.add_vertex(v);
        }
        let mut all: Vec<i64> = g.vertices().collect();
        all.sort();
        assert_eq!(all, vec![5, 6, 7]);
    }
}
