//! Logical wireless network derived from a physical node layout.
//!
//! The physical network is read once at construction: its minimum
//! spanning tree becomes the backbone of the logical network, every node
//! turned into a sensor and every backbone link stored as a directed
//! edge pair. Range updates regrow or shrink the link set and always
//! re-run the full orientation pass, so derived antenna state and
//! statistics never drift from the topology.

pub mod orientation;
pub mod statistics;

use std::collections::HashMap;

use crate::algorithms::MinimumSpanningTree;
use crate::geometry;
use crate::graph::{Vertex, VertexId, WeightedEdge, WeightedGraph};
use crate::model::{AntennaType, Link, Node, Sensor};

pub use orientation::{Beam, RunningStats, compute_beam};
pub use statistics::Route;

/// Tunables for the orientation pass.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Beam width assigned when a sensor covers a single direction and
    /// the true covering angle degenerates to zero. Purely a
    /// visualization floor.
    pub min_beam_angle: f64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig { min_beam_angle: 15.0 }
    }
}

/// Errors surfaced by name-keyed network queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// No sensor with the given name exists in the logical network.
    VertexNotFound(String),
}

impl std::fmt::Display for NetworkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkError::VertexNotFound(name) => {
                write!(f, "no vertex named '{}' in the network", name)
            }
        }
    }
}

impl std::error::Error for NetworkError {}

/// A sensor network with oriented antennas over an MST backbone.
pub struct WirelessNetwork {
    physical: WeightedGraph<Node, Link>,
    mst: WeightedGraph<Node, Link>,
    logical: WeightedGraph<Sensor, Link>,
    antenna_type: AntennaType,
    config: NetworkConfig,
    /// Longest MST edge: the smallest uniform range that keeps every
    /// backbone link covered.
    default_range: f64,
    stats: RunningStats,
}

impl WirelessNetwork {
    /// Build a network of directional sensors from a physical layout.
    pub fn directional(physical: WeightedGraph<Node, Link>) -> Self {
        Self::with_config(physical, AntennaType::Directional, NetworkConfig::default())
    }

    /// Build a network of omnidirectional sensors from a physical layout.
    pub fn omnidirectional(physical: WeightedGraph<Node, Link>) -> Self {
        Self::with_config(
            physical,
            AntennaType::Omnidirectional,
            NetworkConfig::default(),
        )
    }

    pub fn with_config(
        physical: WeightedGraph<Node, Link>,
        antenna_type: AntennaType,
        config: NetworkConfig,
    ) -> Self {
        let mst = MinimumSpanningTree::build(&physical).into_tree();
        let default_range = mst
            .edges()
            .filter_map(|e| mst.edge(e))
            .map(|e| e.weight())
            .fold(0.0, f64::max);

        log::info!(
            "building {:?} network: {} nodes, backbone of {} links, default range {:.3}",
            antenna_type,
            physical.vertex_count(),
            mst.edge_count(),
            default_range
        );

        let mut network = WirelessNetwork {
            physical,
            mst,
            logical: WeightedGraph::new(),
            antenna_type,
            config,
            default_range,
            stats: RunningStats::new(),
        };
        network.rebuild_from_mst();
        network.orient(default_range);
        network
    }

    /// Rebuild the logical topology from the stored backbone: one sensor
    /// per node, one directed edge pair per MST link.
    fn rebuild_from_mst(&mut self) {
        let mut logical: WeightedGraph<Sensor, Link> = WeightedGraph::new();
        let mut sensor_ids: HashMap<VertexId, VertexId> = HashMap::new();

        for node_id in self.mst.vertices() {
            if let Some(node) = self.mst.vertex(node_id) {
                sensor_ids.insert(node_id, logical.insert_vertex(Sensor::from(node)));
            }
        }

        for edge in self.mst.edges() {
            if let Some((from, to)) = self.mst.end_vertices(edge) {
                let u = sensor_ids[&from];
                let v = sensor_ids[&to];
                logical.insert_edge(u, v, Link::default());
                logical.insert_edge(v, u, Link::default());
            }
        }

        self.logical = logical;
    }

    fn orient(&mut self, range: f64) {
        self.stats =
            orientation::orient_sensors(&mut self.logical, self.antenna_type, range, &self.config);
    }

    /// Set a new uniform sensor range, recompute adjacency, and re-run
    /// the orientation pass.
    ///
    /// Omnidirectional networks rebuild the link set from scratch;
    /// directional networks add newly-in-range pairs and drop pairs that
    /// fell out of range. Both reach the same fixed point, and repeating
    /// the call with the same range changes nothing.
    pub fn update_range(&mut self, new_range: f64) {
        log::info!("update_range({:.3}) on {:?} network", new_range, self.antenna_type);

        match self.antenna_type {
            AntennaType::Omnidirectional => self.rebuild_links_in_range(new_range),
            AntennaType::Directional => self.adjust_links_in_range(new_range),
        }

        self.orient(new_range);
    }

    /// Return the network to its MST-derived default: backbone topology,
    /// default range.
    pub fn reset(&mut self) {
        log::info!("reset to backbone topology, range {:.3}", self.default_range);
        self.rebuild_from_mst();
        self.orient(self.default_range);
    }

    /// Drop every link, then connect each ordered pair within range.
    fn rebuild_links_in_range(&mut self, range: f64) {
        let edges: Vec<_> = self.logical.edges().collect();
        for edge in edges {
            self.logical.remove_edge(edge);
        }

        let sensors: Vec<VertexId> = self.logical.vertices().collect();
        for &u in &sensors {
            for &v in &sensors {
                if u != v && self.sensor_distance(u, v) <= range {
                    self.logical.insert_edge(u, v, Link::default());
                }
            }
        }
    }

    /// Insert missing in-range links and remove out-of-range ones.
    fn adjust_links_in_range(&mut self, range: f64) {
        let sensors: Vec<VertexId> = self.logical.vertices().collect();
        for &u in &sensors {
            for &v in &sensors {
                if u == v {
                    continue;
                }
                if self.sensor_distance(u, v) <= range {
                    // Idempotent: a no-op when the edge already exists.
                    self.logical.insert_edge(u, v, Link::default());
                } else if let Some(edge) = self.logical.edge_from_to(u, v) {
                    self.logical.remove_edge(edge);
                }
            }
        }
    }

    fn sensor_distance(&self, u: VertexId, v: VertexId) -> f64 {
        match (self.logical.vertex(u), self.logical.vertex(v)) {
            (Some(a), Some(b)) => geometry::distance(a.x(), a.y(), b.x(), b.y()),
            _ => f64::INFINITY,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn physical_network(&self) -> &WeightedGraph<Node, Link> {
        &self.physical
    }

    pub fn logical_network(&self) -> &WeightedGraph<Sensor, Link> {
        &self.logical
    }

    pub fn antenna_type(&self) -> AntennaType {
        self.antenna_type
    }

    /// The MST-derived default range (longest backbone link).
    pub fn default_range(&self) -> f64 {
        self.default_range
    }

    pub fn average_angle(&self) -> f64 {
        self.stats.average_angle()
    }

    pub fn average_range(&self) -> f64 {
        self.stats.average_range()
    }

    pub fn total_energy_use(&self) -> f64 {
        self.stats.total_energy()
    }

    // ------------------------------------------------------------------
    // Topology statistics
    // ------------------------------------------------------------------

    /// Longest shortest-path weight between any sensor pair.
    pub fn diameter_length(&self) -> f64 {
        statistics::diameter_length(&self.logical)
    }

    /// Longest shortest path between any sensor pair, in hops.
    pub fn diameter_hops(&self) -> usize {
        statistics::diameter_hops(&self.logical)
    }

    /// Mean shortest-path weight over reachable ordered pairs.
    pub fn average_route_length(&self) -> f64 {
        statistics::average_route_length(&self.logical)
    }

    /// Mean shortest-path hop count over reachable ordered pairs.
    pub fn average_route_hops(&self) -> f64 {
        statistics::average_route_hops(&self.logical)
    }

    /// Shortest route between two sensors by name. An unknown name is a
    /// `NetworkError::VertexNotFound`; an unreachable pair is `Ok(None)`.
    pub fn shortest_route(&self, from: &str, to: &str) -> Result<Option<Route>, NetworkError> {
        statistics::shortest_route(&self.logical, from, to)
    }
}
