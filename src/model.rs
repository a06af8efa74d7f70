//! Concrete vertex and edge types for sensor networks.
//!
//! `Node` is a plain physical location, `Sensor` adds antenna state on top
//! of it, and `Link` is the weighted edge connecting either kind. Antenna
//! state lives in fields on `Sensor` rather than a type hierarchy; the
//! `AntennaType` tag decides which fields are meaningful.

use crate::graph::{Vertex, WeightedEdge};

/// Antenna kind of a sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntennaType {
    /// Radiates in a full circle; angle is fixed at 360°.
    Omnidirectional,
    /// Radiates a beam of a given width, centered on a direction.
    Directional,
}

/// A physical node: a named position in the plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: String,
    x: f64,
    y: f64,
}

impl Node {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Node { name: name.into(), x, y }
    }
}

impl Vertex for Node {
    fn name(&self) -> &str {
        &self.name
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

/// A sensor: a node plus antenna configuration.
///
/// Sensors start out omnidirectional with a 360° angle, mirroring an
/// antenna that has not been oriented yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Sensor {
    name: String,
    x: f64,
    y: f64,
    antenna_type: AntennaType,
    antenna_range: f64,
    /// Beam width in degrees, centered on `antenna_direction`.
    antenna_angle: f64,
    /// Beam center in polar degrees, `[0, 360)`.
    antenna_direction: f64,
}

impl Sensor {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Sensor {
            name: name.into(),
            x,
            y,
            antenna_type: AntennaType::Omnidirectional,
            antenna_range: 0.0,
            antenna_angle: 360.0,
            antenna_direction: 0.0,
        }
    }

    pub fn antenna_type(&self) -> AntennaType {
        self.antenna_type
    }

    /// Set the antenna type. Switching to omnidirectional pins the angle
    /// back to 360° and the direction to 0°.
    pub fn set_antenna_type(&mut self, antenna_type: AntennaType) {
        self.antenna_type = antenna_type;
        if antenna_type == AntennaType::Omnidirectional {
            self.antenna_direction = 0.0;
            self.antenna_angle = 360.0;
        }
    }

    pub fn antenna_range(&self) -> f64 {
        self.antenna_range
    }

    pub fn set_antenna_range(&mut self, range: f64) {
        self.antenna_range = range;
    }

    pub fn antenna_angle(&self) -> f64 {
        self.antenna_angle
    }

    /// Set the beam width. A no-op on omnidirectional sensors, whose angle
    /// is fixed at 360°.
    pub fn set_antenna_angle(&mut self, angle: f64) {
        if self.antenna_type == AntennaType::Directional {
            self.antenna_angle = angle;
        }
    }

    pub fn antenna_direction(&self) -> f64 {
        self.antenna_direction
    }

    /// Set the beam center. A no-op on omnidirectional sensors.
    pub fn set_antenna_direction(&mut self, direction: f64) {
        if self.antenna_type == AntennaType::Directional {
            self.antenna_direction = direction;
        }
    }
}

impl From<&Node> for Sensor {
    fn from(node: &Node) -> Self {
        Sensor::new(node.name.clone(), node.x, node.y)
    }
}

impl Vertex for Sensor {
    fn name(&self) -> &str {
        &self.name
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

/// A weighted link between two vertices.
///
/// Name and weight are assigned by the graph at insertion time: the name
/// is derived from the endpoint names and the weight is the Euclidean
/// distance between the endpoints at that moment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Link {
    name: String,
    weight: f64,
}

impl WeightedEdge for Link {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }
}
