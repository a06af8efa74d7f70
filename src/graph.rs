//! Arena-backed weighted graph with index-based adjacency.
//!
//! Vertices and edges live in flat arrays owned by the graph; algorithms
//! refer to them through `VertexId`/`EdgeId` handles instead of shared
//! references. Iteration order is insertion order, which keeps every
//! algorithm in the crate deterministic per run. Slots of removed entries
//! stay unoccupied, so handles are never reused for different entities.
//!
//! Edges are undirected for adjacency purposes, but the endpoint order
//! given at insertion is preserved: the first endpoint is the semantic
//! "from" vertex for any algorithm that cares about direction (Dijkstra
//! relaxation, directional antenna coverage).

use crate::geometry;

/// Capability of a graph vertex: a unique name and a position.
///
/// Name uniqueness within one graph is the graph's responsibility, not
/// the vertex's.
pub trait Vertex {
    fn name(&self) -> &str;
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

/// Capability of a weighted edge. Name and weight are set by the graph at
/// insertion and are not meant to change afterwards.
pub trait WeightedEdge {
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);
    fn weight(&self) -> f64;
    fn set_weight(&mut self, weight: f64);
}

/// Handle to a vertex slot. Valid only for the graph that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

/// Handle to an edge slot. Valid only for the graph that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(usize);

#[derive(Debug, Clone)]
struct VertexSlot<V> {
    data: V,
    incident: Vec<EdgeId>,
}

#[derive(Debug, Clone)]
struct EdgeSlot<E> {
    data: E,
    from: VertexId,
    to: VertexId,
}

/// Undirected weighted graph over named, positioned vertices.
///
/// Edge weights are computed as the Euclidean distance between the
/// endpoints at insertion time and are not recomputed afterwards.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V, E> {
    vertices: Vec<Option<VertexSlot<V>>>,
    edges: Vec<Option<EdgeSlot<E>>>,
    vertex_count: usize,
    edge_count: usize,
}

impl<V, E> Default for WeightedGraph<V, E> {
    fn default() -> Self {
        WeightedGraph {
            vertices: Vec::new(),
            edges: Vec::new(),
            vertex_count: 0,
            edge_count: 0,
        }
    }
}

impl<V: Vertex, E: WeightedEdge> WeightedGraph<V, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of live edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterate over live vertex handles in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| VertexId(i))
    }

    /// Iterate over live edge handles in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| EdgeId(i))
    }

    pub fn vertex(&self, id: VertexId) -> Option<&V> {
        self.vertex_slot(id).map(|slot| &slot.data)
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut V> {
        self.vertices
            .get_mut(id.0)
            .and_then(|slot| slot.as_mut())
            .map(|slot| &mut slot.data)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&E> {
        self.edge_slot(id).map(|slot| &slot.data)
    }

    /// Resolve a vertex by name with a linear scan over live vertices.
    pub fn find_vertex(&self, name: &str) -> Option<VertexId> {
        self.vertices()
            .find(|&id| self.vertex(id).map(|v| v.name() == name).unwrap_or(false))
    }

    /// Insert a vertex, or return the handle of the existing vertex with
    /// the same name. Never fails.
    pub fn insert_vertex(&mut self, vertex: V) -> VertexId {
        if let Some(existing) = self.find_vertex(vertex.name()) {
            return existing;
        }

        self.vertices.push(Some(VertexSlot {
            data: vertex,
            incident: Vec::new(),
        }));
        self.vertex_count += 1;
        VertexId(self.vertices.len() - 1)
    }

    /// Insert an edge running `from -> to`.
    ///
    /// Returns `None` when either endpoint is unknown or when the edge
    /// would be a self loop. If an edge already runs `from -> to` its
    /// handle is returned unchanged. On success the edge's weight is set
    /// to the Euclidean distance between the endpoints and its name to
    /// the concatenated endpoint names.
    pub fn insert_edge(&mut self, from: VertexId, to: VertexId, mut edge: E) -> Option<EdgeId> {
        if from == to {
            return None;
        }
        if let Some(existing) = self.edge_from_to(from, to) {
            return Some(existing);
        }

        let (weight, name) = {
            let u = self.vertex(from)?;
            let v = self.vertex(to)?;
            (
                geometry::distance(u.x(), u.y(), v.x(), v.y()),
                format!("{}{}", u.name(), v.name()),
            )
        };

        edge.set_weight(weight);
        edge.set_name(name);

        self.edges.push(Some(EdgeSlot { data: edge, from, to }));
        self.edge_count += 1;
        let id = EdgeId(self.edges.len() - 1);

        // The edge is undirected for adjacency: register it on both ends.
        for endpoint in [from, to] {
            if let Some(slot) = self.vertex_slot_mut(endpoint) {
                slot.incident.push(id);
            }
        }

        Some(id)
    }

    /// Remove a vertex together with every incident edge.
    ///
    /// Returns the vertex data, or `None` if the handle is unknown.
    pub fn remove_vertex(&mut self, id: VertexId) -> Option<V> {
        self.vertex_slot(id)?;

        // Snapshot the incident list before mutating; removing edges
        // rewrites the adjacency we would otherwise be iterating.
        let incident: Vec<EdgeId> = self.incident_edges(id).to_vec();
        for edge in incident {
            self.remove_edge(edge);
        }

        let slot = self.vertices.get_mut(id.0)?.take()?;
        self.vertex_count -= 1;
        Some(slot.data)
    }

    /// Remove an edge, detaching it from both endpoints.
    ///
    /// Returns the edge data, or `None` if the handle is unknown.
    pub fn remove_edge(&mut self, id: EdgeId) -> Option<E> {
        let slot = self.edges.get_mut(id.0)?.take()?;
        self.edge_count -= 1;

        for endpoint in [slot.from, slot.to] {
            if let Some(vertex) = self.vertex_slot_mut(endpoint) {
                vertex.incident.retain(|&e| e != id);
            }
        }

        Some(slot.data)
    }

    /// Edges incident to a vertex, in insertion order. Empty for an
    /// unknown handle.
    pub fn incident_edges(&self, id: VertexId) -> &[EdgeId] {
        self.vertex_slot(id)
            .map(|slot| slot.incident.as_slice())
            .unwrap_or(&[])
    }

    /// The ordered `(from, to)` endpoints of an edge.
    pub fn end_vertices(&self, id: EdgeId) -> Option<(VertexId, VertexId)> {
        self.edge_slot(id).map(|slot| (slot.from, slot.to))
    }

    /// The endpoint of `edge` opposite to `vertex`, or `None` when the
    /// vertex is not an endpoint of the edge.
    pub fn opposite(&self, vertex: VertexId, edge: EdgeId) -> Option<VertexId> {
        let (from, to) = self.end_vertices(edge)?;
        if vertex == from {
            Some(to)
        } else if vertex == to {
            Some(from)
        } else {
            None
        }
    }

    /// Whether two vertices share an edge in either direction.
    pub fn are_adjacent(&self, u: VertexId, v: VertexId) -> bool {
        self.incident_edges(u)
            .iter()
            .any(|&e| self.opposite(u, e) == Some(v))
    }

    /// The edge running exactly `from -> to`, honoring endpoint order.
    pub fn edge_from_to(&self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        self.incident_edges(from)
            .iter()
            .copied()
            .find(|&e| self.end_vertices(e) == Some((from, to)))
    }

    fn vertex_slot(&self, id: VertexId) -> Option<&VertexSlot<V>> {
        self.vertices.get(id.0).and_then(|slot| slot.as_ref())
    }

    fn vertex_slot_mut(&mut self, id: VertexId) -> Option<&mut VertexSlot<V>> {
        self.vertices.get_mut(id.0).and_then(|slot| slot.as_mut())
    }

    fn edge_slot(&self, id: EdgeId) -> Option<&EdgeSlot<E>> {
        self.edges.get(id.0).and_then(|slot| slot.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Link, Node};

    fn square_graph() -> (WeightedGraph<Node, Link>, [VertexId; 4]) {
        let mut g = WeightedGraph::new();
        let a = g.insert_vertex(Node::new("A", 0.0, 0.0));
        let b = g.insert_vertex(Node::new("B", 3.0, 0.0));
        let c = g.insert_vertex(Node::new("C", 3.0, 4.0));
        let d = g.insert_vertex(Node::new("D", 0.0, 4.0));
        (g, [a, b, c, d])
    }

    #[test]
    fn insert_vertex_is_idempotent_by_name() {
        let (mut g, [a, ..]) = square_graph();
        let again = g.insert_vertex(Node::new("A", 99.0, 99.0));
        assert_eq!(a, again);
        assert_eq!(g.vertex_count(), 4);
        // The original position wins; the duplicate is discarded.
        assert_eq!(g.vertex(a).unwrap().x(), 0.0);
    }

    #[test]
    fn insert_edge_sets_weight_and_name() {
        let (mut g, [a, _, c, _]) = square_graph();
        let e = g.insert_edge(a, c, Link::default()).unwrap();
        assert_eq!(g.edge(e).unwrap().weight(), 5.0);
        assert_eq!(g.edge(e).unwrap().name(), "AC");
        assert_eq!(g.end_vertices(e), Some((a, c)));
    }

    #[test]
    fn insert_edge_rejects_unknown_endpoints_and_self_loops() {
        let (mut g, [a, ..]) = square_graph();
        let mut other = WeightedGraph::<Node, Link>::new();
        let foreign = other.insert_vertex(Node::new("Z", 0.0, 0.0));
        let bogus = VertexId(foreign.0 + 100);

        assert!(g.insert_edge(a, bogus, Link::default()).is_none());
        assert!(g.insert_edge(a, a, Link::default()).is_none());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn insert_edge_is_idempotent_per_ordered_pair() {
        let (mut g, [a, b, ..]) = square_graph();
        let e1 = g.insert_edge(a, b, Link::default()).unwrap();
        let e2 = g.insert_edge(a, b, Link::default()).unwrap();
        assert_eq!(e1, e2);
        assert_eq!(g.edge_count(), 1);

        // The reverse direction is a distinct edge.
        let e3 = g.insert_edge(b, a, Link::default()).unwrap();
        assert_ne!(e1, e3);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn remove_vertex_removes_incident_edges_first() {
        let (mut g, [a, b, c, _]) = square_graph();
        g.insert_edge(a, b, Link::default()).unwrap();
        g.insert_edge(b, c, Link::default()).unwrap();
        g.insert_edge(a, c, Link::default()).unwrap();

        assert!(g.remove_vertex(b).is_some());
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 1);
        assert!(!g.are_adjacent(a, b));
        assert!(g.are_adjacent(a, c));

        // Removing again reports "not found".
        assert!(g.remove_vertex(b).is_none());
    }

    #[test]
    fn remove_edge_detaches_both_endpoints() {
        let (mut g, [a, b, ..]) = square_graph();
        let e = g.insert_edge(a, b, Link::default()).unwrap();
        assert!(g.remove_edge(e).is_some());
        assert!(g.incident_edges(a).is_empty());
        assert!(g.incident_edges(b).is_empty());
        assert!(g.remove_edge(e).is_none());
    }

    #[test]
    fn queries_on_inconsistent_input_signal_not_applicable() {
        let (mut g, [a, b, c, d]) = square_graph();
        let e = g.insert_edge(a, b, Link::default()).unwrap();

        assert_eq!(g.opposite(c, e), None);
        assert_eq!(g.opposite(a, e), Some(b));
        assert!(!g.are_adjacent(c, d));
        assert_eq!(g.edge_from_to(b, a), None);
        assert_eq!(g.find_vertex("missing"), None);
    }

    #[test]
    fn iteration_order_is_insertion_order() {
        let (mut g, [a, b, c, d]) = square_graph();
        g.insert_edge(c, d, Link::default());
        g.insert_edge(a, b, Link::default());

        let order: Vec<VertexId> = g.vertices().collect();
        assert_eq!(order, vec![a, b, c, d]);

        let names: Vec<&str> = g.edges().map(|e| g.edge(e).unwrap().name()).collect();
        assert_eq!(names, vec!["CD", "AB"]);
    }
}
