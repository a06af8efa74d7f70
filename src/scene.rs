//! JSON scene description: loading, validation, and graph construction.
//!
//! A scene is the structured alternative to the plain NODE/EDGE token
//! format: a JSON document listing named node positions and the links
//! between them. Unlike the token parser, scene loading is strict — a
//! scene that fails validation is rejected as a whole.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::graph::{VertexId, WeightedGraph};
use crate::model::{Link, Node};

/// Error type for scene loading failures.
#[derive(Debug)]
pub enum SceneLoadError {
    FileReadError(String),
    ParseError(String),
    ValidationError(String),
}

impl std::fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneLoadError::FileReadError(msg) => write!(f, "Failed to read file: {}", msg),
            SceneLoadError::ParseError(msg) => write!(f, "Failed to parse JSON: {}", msg),
            SceneLoadError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for SceneLoadError {}

/// A node record in a scene file.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneNode {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

/// A link record in a scene file, referencing nodes by name.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneEdge {
    pub from: String,
    pub to: String,
}

/// Root structure of a scene file.
#[derive(Debug, Deserialize)]
pub struct Scene {
    /// All nodes present in the scene.
    pub nodes: Vec<SceneNode>,
    /// Physical links between nodes.
    #[serde(default)]
    pub edges: Vec<SceneEdge>,
}

impl Scene {
    /// Build the physical network described by this scene.
    pub fn to_graph(&self) -> WeightedGraph<Node, Link> {
        let mut graph = WeightedGraph::new();
        let mut ids: Vec<(String, VertexId)> = Vec::with_capacity(self.nodes.len());

        for node in &self.nodes {
            let id = graph.insert_vertex(Node::new(node.name.clone(), node.x, node.y));
            ids.push((node.name.clone(), id));
        }

        let lookup = |name: &str| ids.iter().find(|(n, _)| n == name).map(|&(_, id)| id);
        for edge in &self.edges {
            if let (Some(u), Some(v)) = (lookup(&edge.from), lookup(&edge.to)) {
                graph.insert_edge(u, v, Link::default());
            }
        }

        graph
    }
}

/// Load, parse, and validate a scene from a file.
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene, SceneLoadError> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
        .map_err(|e| SceneLoadError::FileReadError(e.to_string()))?;

    let scene: Scene = serde_json::from_str(&data)
        .context("Invalid JSON format")
        .map_err(|e| SceneLoadError::ParseError(e.to_string()))?;

    validate_scene(&scene).map_err(SceneLoadError::ValidationError)?;

    Ok(scene)
}

/// Validate a parsed scene.
///
/// Rejects empty node lists, duplicate node names, self-loop edges, and
/// edges naming unknown nodes.
pub fn validate_scene(scene: &Scene) -> Result<(), String> {
    if scene.nodes.is_empty() {
        return Err("Scene must contain at least one node".to_string());
    }

    let mut names = HashSet::new();
    for node in &scene.nodes {
        if node.name.is_empty() {
            return Err("Node with empty name".to_string());
        }
        if !names.insert(node.name.as_str()) {
            return Err(format!("Duplicate node name found: {}", node.name));
        }
    }

    for (idx, edge) in scene.edges.iter().enumerate() {
        if edge.from == edge.to {
            return Err(format!("Edge {} is a self loop on node {}", idx, edge.from));
        }
        for name in [&edge.from, &edge.to] {
            if !names.contains(name.as_str()) {
                return Err(format!("Edge {} references unknown node {}", idx, name));
            }
        }
    }

    Ok(())
}
