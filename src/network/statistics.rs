//! Topology statistics over the logical network.
//!
//! Diameter and average-path figures take the maximum (or mean) of the
//! single-source shortest-path solution from every vertex. Unreachable
//! pairs are skipped rather than counted as zero; on a connected network
//! this matches the straightforward all-pairs definition.

use crate::algorithms::ShortestPaths;
use crate::graph::{Vertex, WeightedGraph};
use crate::model::{Link, Sensor};

use super::NetworkError;

/// A resolved shortest route between two named sensors.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Sensor names from source to destination, inclusive.
    pub path: Vec<String>,
    /// Total weight of the route.
    pub length: f64,
    /// Number of links traversed.
    pub hops: usize,
}

/// Longest shortest-path weight between any pair of sensors.
pub fn diameter_length(graph: &WeightedGraph<Sensor, Link>) -> f64 {
    let mut longest: f64 = 0.0;
    for u in graph.vertices() {
        let sssp = ShortestPaths::solve(graph, u);
        for v in graph.vertices() {
            if let Some(distance) = sssp.distance(v) {
                longest = longest.max(distance);
            }
        }
    }
    longest
}

/// Longest shortest path between any pair of sensors, counted in hops.
pub fn diameter_hops(graph: &WeightedGraph<Sensor, Link>) -> usize {
    let mut longest = 0;
    for u in graph.vertices() {
        let sssp = ShortestPaths::solve(graph, u);
        for v in graph.vertices() {
            if let Some(path) = sssp.path_to(v) {
                longest = longest.max(path.hops());
            }
        }
    }
    longest
}

/// Mean shortest-path weight over all reachable ordered pairs `u != v`.
/// Zero when no such pair exists.
pub fn average_route_length(graph: &WeightedGraph<Sensor, Link>) -> f64 {
    let mut total = 0.0;
    let mut count = 0usize;
    for u in graph.vertices() {
        let sssp = ShortestPaths::solve(graph, u);
        for v in graph.vertices() {
            if v == u {
                continue;
            }
            if let Some(distance) = sssp.distance(v) {
                total += distance;
                count += 1;
            }
        }
    }
    if count == 0 { 0.0 } else { total / count as f64 }
}

/// Mean shortest-path hop count over all reachable ordered pairs
/// `u != v`. Zero when no such pair exists.
pub fn average_route_hops(graph: &WeightedGraph<Sensor, Link>) -> f64 {
    let mut total = 0usize;
    let mut count = 0usize;
    for u in graph.vertices() {
        let sssp = ShortestPaths::solve(graph, u);
        for v in graph.vertices() {
            if v == u {
                continue;
            }
            if let Some(path) = sssp.path_to(v) {
                total += path.hops();
                count += 1;
            }
        }
    }
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

/// Shortest route between two sensors resolved by name.
///
/// An unknown name is an error, distinct from the valid zero-length
/// route of a vertex to itself. A known but unreachable destination
/// yields `Ok(None)`.
pub fn shortest_route(
    graph: &WeightedGraph<Sensor, Link>,
    from: &str,
    to: &str,
) -> Result<Option<Route>, NetworkError> {
    let from_id = graph
        .find_vertex(from)
        .ok_or_else(|| NetworkError::VertexNotFound(from.to_string()))?;
    let to_id = graph
        .find_vertex(to)
        .ok_or_else(|| NetworkError::VertexNotFound(to.to_string()))?;

    let sssp = ShortestPaths::solve(graph, from_id);
    let Some(path) = sssp.path_to(to_id) else {
        return Ok(None);
    };

    let names = path
        .vertices
        .iter()
        .filter_map(|&v| graph.vertex(v))
        .map(|s| s.name().to_string())
        .collect();

    Ok(Some(Route {
        path: names,
        length: path.length,
        hops: path.hops(),
    }))
}
