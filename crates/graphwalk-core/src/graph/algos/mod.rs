//! Graph algorithm implementations
//!
//! - `search`: breadth-first and depth-first traversal
//! - `structure`: path counting, connectivity, cycles, topological order
//! - `dijkstra`: single-source shortest paths
//! - `prim`: minimum spanning tree
//! - `shared`: min-heap entry used by the priority-queue algorithms

pub mod dijkstra;
pub mod prim;
pub mod search;
pub mod shared;
pub mod structure;

pub use dijkstra::{Dijkstra, PathMetric, ShortestPaths, Visit};
pub use prim::Prim;
