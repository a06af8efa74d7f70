//! Antenna orientation: beam computation and running statistics.
//!
//! For each sensor the directions to its covered neighbors are computed
//! in polar degrees, sorted, and walked cyclically to find the largest
//! angular gap. The beam then covers everything outside that gap: its
//! width is `360 - largest_gap` and it points at the midpoint of the
//! uncovered arc.

use crate::geometry;
use crate::graph::{Vertex, VertexId, WeightedGraph};
use crate::model::{AntennaType, Link, Sensor};

use super::NetworkConfig;

/// A computed beam: width and center direction, both in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beam {
    pub angle: f64,
    pub direction: f64,
}

/// Find the minimal covering beam for a set of neighbor directions.
///
/// Returns `None` when there are no neighbors at all. With a single
/// neighbor every cyclic gap degenerates to zero; the beam then gets the
/// configured minimal width (`min_beam_angle`) so it stays visible on a
/// rendering — a presentation floor, not a coverage requirement.
pub fn compute_beam(mut angles: Vec<f64>, min_beam_angle: f64) -> Option<Beam> {
    if angles.is_empty() {
        return None;
    }

    angles.sort_by(f64::total_cmp);
    let n = angles.len();

    // Walk the sorted angles cyclically; the gap at index i spans from
    // the previous angle to angles[i], wrapping last -> first at i = 0.
    // On ties the first occurrence wins.
    let mut largest_gap = -1.0;
    let mut largest_idx = 0;
    for i in 0..n {
        let previous = angles[(i + n - 1) % n];
        let gap = geometry::arc_between(previous, angles[i]);
        if gap > largest_gap {
            largest_gap = gap;
            largest_idx = i;
        }
    }

    let angle = if largest_gap == 0.0 {
        min_beam_angle
    } else {
        360.0 - largest_gap
    };

    // The beam points away from the covered arc: take the midpoint of
    // the two angles bounding the largest gap and flip it by 180°,
    // unless the gap wraps the 0°/360° boundary, in which case the
    // midpoint already lies inside the covered arc.
    let bound_end = angles[largest_idx];
    let bound_start = angles[(largest_idx + n - 1) % n];
    let midpoint = (bound_end + bound_start) / 2.0;
    let direction = if bound_end > bound_start {
        (midpoint + 180.0) % 360.0
    } else {
        midpoint % 360.0
    };

    Some(Beam { angle, direction })
}

/// Aggregate antenna statistics, maintained incrementally.
///
/// The averages use the weighted-running-average update
/// `avg' = avg * (n / (n + 1)) + value / (n + 1)` with `n` incremented
/// after each sensor. Energy accumulates the area proxy
/// `1/2 * range^2 * angle` per sensor, with the angle in degrees.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunningStats {
    average_angle: f64,
    average_range: f64,
    total_energy: f64,
    count: usize,
}

impl RunningStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn record(&mut self, angle: f64, range: f64) {
        let n = self.count as f64;
        self.average_angle = self.average_angle * (n / (n + 1.0)) + angle * (1.0 / (n + 1.0));
        self.average_range = self.average_range * (n / (n + 1.0)) + range * (1.0 / (n + 1.0));
        self.total_energy += 0.5 * range * range * angle;
        self.count += 1;
    }

    pub fn average_angle(&self) -> f64 {
        self.average_angle
    }

    pub fn average_range(&self) -> f64 {
        self.average_range
    }

    pub fn total_energy(&self) -> f64 {
        self.total_energy
    }
}

/// Recompute antenna parameters for every sensor in the logical network.
///
/// All sensors receive the same range. Statistics are rebuilt from
/// scratch on every pass; nothing is patched incrementally, so repeated
/// passes over the same topology are idempotent.
pub(super) fn orient_sensors(
    logical: &mut WeightedGraph<Sensor, Link>,
    antenna_type: AntennaType,
    range: f64,
    config: &NetworkConfig,
) -> RunningStats {
    let mut stats = RunningStats::new();
    let sensor_ids: Vec<VertexId> = logical.vertices().collect();

    match antenna_type {
        AntennaType::Omnidirectional => {
            for id in sensor_ids {
                if let Some(sensor) = logical.vertex_mut(id) {
                    sensor.set_antenna_type(AntennaType::Omnidirectional);
                    sensor.set_antenna_range(range);
                    stats.record(sensor.antenna_angle(), sensor.antenna_range());
                }
            }
        }
        AntennaType::Directional => {
            for id in sensor_ids {
                let angles = covered_neighbor_angles(logical, id);
                let beam = compute_beam(angles, config.min_beam_angle);

                let Some(sensor) = logical.vertex_mut(id) else {
                    continue;
                };
                sensor.set_antenna_type(AntennaType::Directional);
                match beam {
                    Some(beam) => {
                        sensor.set_antenna_direction(beam.direction);
                        sensor.set_antenna_angle(beam.angle);
                        sensor.set_antenna_range(range);
                    }
                    None => {
                        // Isolated sensor: contributes nothing to
                        // coverage or energy.
                        sensor.set_antenna_direction(0.0);
                        sensor.set_antenna_angle(0.0);
                        sensor.set_antenna_range(0.0);
                    }
                }
                stats.record(sensor.antenna_angle(), sensor.antenna_range());
            }
        }
    }

    stats
}

/// Directions from a sensor to every neighbor it covers.
///
/// Coverage follows outgoing edges only; bidirectional links are stored
/// as directed pairs, so this sees every connected neighbor exactly once.
fn covered_neighbor_angles(logical: &WeightedGraph<Sensor, Link>, from: VertexId) -> Vec<f64> {
    let Some(origin) = logical.vertex(from) else {
        return Vec::new();
    };
    let (ox, oy) = (origin.x(), origin.y());

    logical
        .incident_edges(from)
        .iter()
        .filter(|&&e| matches!(logical.end_vertices(e), Some((f, _)) if f == from))
        .filter_map(|&e| logical.opposite(from, e))
        .filter_map(|n| logical.vertex(n))
        .map(|neighbor| geometry::direction(ox, oy, neighbor.x(), neighbor.y()))
        .collect()
}
