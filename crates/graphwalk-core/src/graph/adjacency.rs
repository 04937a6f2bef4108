use std::collections::BTreeMap;
use std::fmt;

use crate::bail_unknown_vertex;
use crate::error::Result;
use crate::graph::types::{Edge, EdgeKind, Payload, Vertex};

/// Graph stored as an adjacency list.
///
/// Every vertex maps to the edges leaving it, in insertion order. Keys are
/// ordered by payload, which fixes the iteration order used by
/// `all_vertices`, `is_disconnected`, `topological_sort` and Prim's start
/// vertex. An undirected connection is two directed edge records.
///
/// The graph only grows: there is no vertex or edge removal.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    adjacencies: BTreeMap<Vertex<T>, Vec<Edge<T>>>,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Graph {
            adjacencies: BTreeMap::new(),
        }
    }
}

impl<T: Payload> Graph<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a vertex with no edges and return it.
    ///
    /// If a vertex with an equal payload already exists, its entry and edges
    /// are kept as they are.
    pub fn create_vertex(&mut self, data: T) -> Vertex<T> {
        let vertex = Vertex::new(data);
        self.adjacencies.entry(vertex.clone()).or_default();
        vertex
    }

    /// Add an edge of the given kind.
    pub fn add(
        &mut self,
        kind: EdgeKind,
        source: &Vertex<T>,
        destination: &Vertex<T>,
        weight: f64,
    ) -> Result<()> {
        match kind {
            EdgeKind::Directed => self.add_directed_edge(source, destination, weight),
            EdgeKind::Undirected => self.add_undirected_edge(source, destination, weight),
        }
    }

    /// Append an edge to `source`'s list. Both endpoints must already exist.
    pub fn add_directed_edge(
        &mut self,
        source: &Vertex<T>,
        destination: &Vertex<T>,
        weight: f64,
    ) -> Result<()> {
        self.ensure_contains(destination)?;
        match self.adjacencies.get_mut(source) {
            Some(edges) => {
                edges.push(Edge::new(source.clone(), destination.clone(), weight));
                Ok(())
            }
            None => bail_unknown_vertex!(source.data()),
        }
    }

    /// Add a directed edge in both directions with the same weight.
    pub fn add_undirected_edge(
        &mut self,
        source: &Vertex<T>,
        destination: &Vertex<T>,
        weight: f64,
    ) -> Result<()> {
        // Validate both ends first so a failure leaves no half-added pair.
        self.ensure_contains(source)?;
        self.ensure_contains(destination)?;
        let edge = Edge::new(source.clone(), destination.clone(), weight);
        let back = edge.reversed();
        for e in [edge, back] {
            self.adjacencies.entry(e.source.clone()).or_default().push(e);
        }
        Ok(())
    }

    /// Add every vertex of `other` with an empty edge list.
    pub fn copy_vertices_from(&mut self, other: &Graph<T>) {
        for vertex in other.adjacencies.keys() {
            self.adjacencies.entry(vertex.clone()).or_default();
        }
    }

    /// Outgoing edges of `vertex` in insertion order.
    pub fn edges(&self, vertex: &Vertex<T>) -> Result<&[Edge<T>]> {
        match self.adjacencies.get(vertex) {
            Some(edges) => Ok(edges),
            None => bail_unknown_vertex!(vertex.data()),
        }
    }

    /// Weight of the first edge from `source` to `destination`.
    ///
    /// Returns `0.0` when no such edge exists, which cannot be told apart
    /// from a real zero-weight edge.
    pub fn weight(&self, source: &Vertex<T>, destination: &Vertex<T>) -> Result<f64> {
        Ok(self
            .edges(source)?
            .iter()
            .find(|edge| edge.destination == *destination)
            .map_or(0.0, |edge| edge.weight))
    }

    /// Snapshot of all vertices in key order.
    pub fn all_vertices(&self) -> Vec<Vertex<T>> {
        self.adjacencies.keys().cloned().collect()
    }

    pub fn contains(&self, vertex: &Vertex<T>) -> bool {
        self.adjacencies.contains_key(vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacencies.len()
    }

    /// Number of directed edge records (an undirected edge counts twice).
    pub fn edge_count(&self) -> usize {
        self.adjacencies.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacencies.is_empty()
    }

    pub fn adjacencies(&self) -> &BTreeMap<Vertex<T>, Vec<Edge<T>>> {
        &self.adjacencies
    }

    pub(crate) fn first_vertex(&self) -> Option<&Vertex<T>> {
        self.adjacencies.keys().next()
    }

    pub(crate) fn ensure_contains(&self, vertex: &Vertex<T>) -> Result<()> {
        if self.contains(vertex) {
            Ok(())
        } else {
            bail_unknown_vertex!(vertex.data())
        }
    }

    /// The key stored in the graph for `vertex`.
    ///
    /// Payload equality may look at only part of the payload, so the stored
    /// key can carry more data than the vertex a caller used to name it.
    pub(crate) fn stored(&self, vertex: &Vertex<T>) -> Vertex<T> {
        self.adjacencies
            .get_key_value(vertex)
            .map_or_else(|| vertex.clone(), |(key, _)| key.clone())
    }

    /// Edges of a vertex already known to be in the graph.
    pub(crate) fn neighbours(&self, vertex: &Vertex<T>) -> &[Edge<T>] {
        self.adjacencies
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl<T: fmt::Display> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Adjacency list for the network with weights:")?;
        for (vertex, edges) in &self.adjacencies {
            write!(f, "{} ---> [ ", vertex)?;
            for (i, edge) in edges.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", edge)?;
            }
            writeln!(f, " ]")?;
        }
        Ok(())
    }
}
