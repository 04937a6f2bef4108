//! Graphwalk Core Library
//!
//! A generic directed/undirected graph with breadth-first and depth-first
//! search, path counting, connectivity and cycle checks, topological
//! ordering, Dijkstra shortest paths and Prim minimum spanning trees.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod network;
