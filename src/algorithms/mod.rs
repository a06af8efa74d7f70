//! Graph algorithms used by the network layer.

pub mod mst;
pub mod sssp;
pub mod vertex_cover;

pub use mst::MinimumSpanningTree;
pub use sssp::{Path, ShortestPaths};
pub use vertex_cover::VertexCover;
