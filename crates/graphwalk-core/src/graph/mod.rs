//! Generic adjacency-list graph and its algorithms
//!
//! Provides:
//! - `Graph`: vertices, edges and traversal/structural queries
//! - `Dijkstra`: shortest-path trees and route reconstruction
//! - `Prim`: minimum spanning trees

pub mod adjacency;
pub mod algos;
pub mod types;

pub use adjacency::Graph;
pub use algos::{Dijkstra, PathMetric, Prim, ShortestPaths, Visit};
pub use types::{Edge, EdgeKind, Payload, Vertex};
