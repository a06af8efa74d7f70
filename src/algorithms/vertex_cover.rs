//! 2-approximation vertex cover via maximal matching.
//!
//! Repeatedly take any remaining edge, add both endpoints to the cover,
//! and discard every edge incident to either endpoint. The chosen edges
//! form a maximal matching and the cover is at most twice the optimum
//! (Cormen et al., Introduction to Algorithms, 3rd ed., pg. 1109).

use std::collections::HashSet;

use crate::graph::{EdgeId, Vertex, VertexId, WeightedEdge, WeightedGraph};

/// Result of the approximation: the cover and the matching that built it.
pub struct VertexCover {
    cover: HashSet<VertexId>,
    matching: HashSet<EdgeId>,
}

impl VertexCover {
    /// Run the approximation over `graph`.
    ///
    /// Edge selection order follows graph iteration order. That makes the
    /// run deterministic, but no particular selection is promised by the
    /// algorithm; callers should treat the concrete matching as one of
    /// several valid answers.
    pub fn approximate<V: Vertex, E: WeightedEdge>(graph: &WeightedGraph<V, E>) -> Self {
        let mut cover = HashSet::new();
        let mut matching = HashSet::new();

        let mut remaining: Vec<EdgeId> = graph.edges().collect();

        while let Some(&edge) = remaining.first() {
            let Some((u, v)) = graph.end_vertices(edge) else {
                remaining.remove(0);
                continue;
            };

            cover.insert(u);
            cover.insert(v);
            matching.insert(edge);

            remaining.retain(|&e| {
                graph
                    .end_vertices(e)
                    .map(|(a, b)| a != u && a != v && b != u && b != v)
                    .unwrap_or(false)
            });
        }

        VertexCover { cover, matching }
    }

    pub fn cover(&self) -> &HashSet<VertexId> {
        &self.cover
    }

    pub fn maximal_matching(&self) -> &HashSet<EdgeId> {
        &self.matching
    }
}
