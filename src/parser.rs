//! Plain-text graph description parser.
//!
//! The format is a token stream of records, delimited by any mix of
//! whitespace, commas, and parentheses:
//!
//! ```text
//! NODE A 0.0 0.0
//! NODE B (0.0, 4.0)
//! EDGE A B
//! ```
//!
//! Malformed or out-of-order records are skipped with a warning; parsing
//! never fails on bad content, only on unreadable files.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;

use crate::graph::{VertexId, WeightedGraph};
use crate::model::{Link, Node};

/// Parse a graph description from a string.
///
/// Unknown tokens and incomplete records are skipped with a
/// `log::warn!`; an `EDGE` naming a node that has not appeared yet is
/// likewise skipped.
pub fn parse_str(input: &str) -> WeightedGraph<Node, Link> {
    let mut graph = WeightedGraph::new();
    let mut nodes: HashMap<String, VertexId> = HashMap::new();

    let mut tokens = input
        .split(|c: char| c.is_whitespace() || c == ',' || c == '(' || c == ')')
        .filter(|t| !t.is_empty());

    while let Some(token) = tokens.next() {
        match token {
            "NODE" => {
                let Some(name) = tokens.next() else {
                    log::warn!("NODE record truncated at end of input");
                    break;
                };
                let x = tokens.next().and_then(|t| t.parse::<f64>().ok());
                let y = tokens.next().and_then(|t| t.parse::<f64>().ok());
                let (Some(x), Some(y)) = (x, y) else {
                    log::warn!("skipping NODE '{}': unparseable coordinates", name);
                    continue;
                };

                let id = graph.insert_vertex(Node::new(name, x, y));
                nodes.insert(name.to_string(), id);
            }
            "EDGE" => {
                let (Some(from), Some(to)) = (tokens.next(), tokens.next()) else {
                    log::warn!("EDGE record truncated at end of input");
                    break;
                };
                let (Some(&u), Some(&v)) = (nodes.get(from), nodes.get(to)) else {
                    log::warn!("skipping EDGE {} -> {}: unknown node name", from, to);
                    continue;
                };
                graph.insert_edge(u, v, Link::default());
            }
            other => {
                log::warn!("skipping unexpected token '{}'", other);
            }
        }
    }

    graph
}

/// Read and parse a graph description file.
pub fn parse_file(path: impl AsRef<Path>) -> anyhow::Result<WeightedGraph<Node, Link>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read graph description {}", path.display()))?;
    Ok(parse_str(&text))
}
