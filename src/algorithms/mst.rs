//! Minimum spanning tree construction (Kruskal).
//!
//! Edges are taken in non-decreasing weight order over a disjoint-set
//! forest; an edge joins the tree only when its endpoints are still in
//! different components. The sort is stable, so weight ties fall back to
//! insertion order — arbitrary in meaning but deterministic per run.

use std::collections::HashMap;

use crate::graph::{Vertex, VertexId, WeightedEdge, WeightedGraph};

/// The minimum spanning tree (or spanning forest) of a weighted graph.
///
/// For a connected input the tree holds every input vertex and exactly
/// `|V| - 1` edges. A disconnected input degrades to a spanning forest of
/// its components; this is not an error.
pub struct MinimumSpanningTree<V, E> {
    tree: WeightedGraph<V, E>,
    total_weight: f64,
}

impl<V, E> MinimumSpanningTree<V, E>
where
    V: Vertex + Clone,
    E: WeightedEdge + Default,
{
    /// Build the MST of `graph`.
    ///
    /// Endpoint order of every chosen edge is preserved from the input,
    /// so direction-sensitive consumers see the same "from" vertices.
    pub fn build(graph: &WeightedGraph<V, E>) -> Self {
        let mut tree: WeightedGraph<V, E> = WeightedGraph::new();
        let mut total_weight = 0.0;

        // The output always contains every input vertex, even isolated
        // ones. Map input handles to output handles as we go.
        let mut tree_ids: HashMap<VertexId, VertexId> = HashMap::new();
        for v in graph.vertices() {
            if let Some(data) = graph.vertex(v) {
                tree_ids.insert(v, tree.insert_vertex(data.clone()));
            }
        }

        let mut sets = DisjointSets::new(graph.vertices());

        // Stable sort: ties keep insertion order.
        let mut sorted_edges: Vec<_> = graph.edges().collect();
        sorted_edges.sort_by(|&a, &b| {
            let wa = graph.edge(a).map(|e| e.weight()).unwrap_or(0.0);
            let wb = graph.edge(b).map(|e| e.weight()).unwrap_or(0.0);
            wa.total_cmp(&wb)
        });

        for edge in sorted_edges {
            let Some((from, to)) = graph.end_vertices(edge) else {
                continue;
            };

            if sets.union(from, to) {
                let tree_from = tree_ids[&from];
                let tree_to = tree_ids[&to];
                tree.insert_edge(tree_from, tree_to, E::default());
                total_weight += graph.edge(edge).map(|e| e.weight()).unwrap_or(0.0);
            }
        }

        MinimumSpanningTree { tree, total_weight }
    }

    pub fn tree(&self) -> &WeightedGraph<V, E> {
        &self.tree
    }

    pub fn into_tree(self) -> WeightedGraph<V, E> {
        self.tree
    }

    /// Sum of the weights of all chosen edges.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }
}

/// Disjoint vertex sets, merged smaller-into-larger by cardinality.
struct DisjointSets {
    set_of: HashMap<VertexId, usize>,
    members: Vec<Vec<VertexId>>,
}

impl DisjointSets {
    fn new(vertices: impl Iterator<Item = VertexId>) -> Self {
        let mut set_of = HashMap::new();
        let mut members = Vec::new();
        for v in vertices {
            set_of.insert(v, members.len());
            members.push(vec![v]);
        }
        DisjointSets { set_of, members }
    }

    /// Merge the sets containing `u` and `v`. Returns `false` when they
    /// are already in the same set (the edge would close a cycle).
    fn union(&mut self, u: VertexId, v: VertexId) -> bool {
        let (Some(&i), Some(&j)) = (self.set_of.get(&u), self.set_of.get(&v)) else {
            return false;
        };
        if i == j {
            return false;
        }

        let (small, large) = if self.members[i].len() <= self.members[j].len() {
            (i, j)
        } else {
            (j, i)
        };

        let moved = std::mem::take(&mut self.members[small]);
        for member in &moved {
            self.set_of.insert(*member, large);
        }
        self.members[large].extend(moved);
        true
    }
}
