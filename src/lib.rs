//! Wireless sensor network topology planner.
//!
//! Given a fixed set of physical node positions and the links between
//! them, this crate computes a minimum-cost backbone (Kruskal MST),
//! derives a per-sensor antenna configuration — range for every sensor,
//! plus pointing direction and beam width for directional antennas —
//! that keeps every backbone link covered, and answers shortest-path and
//! topology-statistics queries against the resulting logical network.
//!
//! The pipeline:
//!
//! ```text
//! physical network  ->  MST backbone  ->  logical sensor network
//!   (parser/scene)      (algorithms)      (orientation + statistics)
//! ```
//!
//! Everything is synchronous and single-threaded; range and beam angle
//! are purely geometric abstractions over Euclidean distance. Logging
//! goes through the `log` facade; install any logger to observe network
//! construction and range updates.
//!
//! # Example
//!
//! ```
//! use sensornet_planner::network::WirelessNetwork;
//! use sensornet_planner::parser;
//!
//! let physical = parser::parse_str(
//!     "NODE A 0 0  NODE B 0 4  NODE C 0 12  NODE D 3 8
//!      EDGE A B  EDGE B C  EDGE B D  EDGE C D",
//! );
//!
//! let mut net = WirelessNetwork::directional(physical);
//! assert_eq!(net.diameter_hops(), 3);
//!
//! net.update_range(8.2);
//! let route = net.shortest_route("A", "C").unwrap().unwrap();
//! assert_eq!(route.hops, 2);
//! ```

pub mod algorithms;
pub mod geometry;
pub mod graph;
pub mod model;
pub mod network;
pub mod parser;
pub mod scene;

pub use graph::{EdgeId, Vertex, VertexId, WeightedEdge, WeightedGraph};
pub use model::{AntennaType, Link, Node, Sensor};
pub use network::{NetworkConfig, NetworkError, Route, WirelessNetwork};
