use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// Bounds required of a vertex payload.
///
/// The total order keys the adjacency map and breaks ties in the priority
/// queues; the debug form names vertices in error messages.
pub trait Payload: Clone + Ord + fmt::Debug {}

impl<T: Clone + Ord + fmt::Debug> Payload for T {}

/// A graph node wrapping a payload value.
///
/// Equality and ordering are those of the payload. A vertex holds no
/// reference to the graph that created it, so `Vertex::new` can name an
/// existing vertex for lookups.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Vertex<T> {
    data: T,
}

impl<T> Vertex<T> {
    pub fn new(data: T) -> Self {
        Vertex { data }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn into_inner(self) -> T {
        self.data
    }
}

impl<T> From<T> for Vertex<T> {
    fn from(data: T) -> Self {
        Vertex::new(data)
    }
}

impl<T: fmt::Display> fmt::Display for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.data.fmt(f)
    }
}

/// A weighted, directed connection between two vertices.
///
/// `PartialEq` and `Ord` compare the source vertex only. Algorithms that
/// need weight or distance ordering wrap edges in their own heap entries.
#[derive(Debug, Clone, Serialize)]
pub struct Edge<T> {
    pub source: Vertex<T>,
    pub destination: Vertex<T>,
    pub weight: f64,
}

impl<T> Edge<T> {
    /// Weight of an edge whose weight was left out
    pub const DEFAULT_WEIGHT: f64 = 1.0;

    pub fn new(source: Vertex<T>, destination: Vertex<T>, weight: f64) -> Self {
        Edge {
            source,
            destination,
            weight,
        }
    }

    /// The same connection walked the other way
    pub fn reversed(&self) -> Self
    where
        T: Clone,
    {
        Edge::new(
            self.destination.clone(),
            self.source.clone(),
            self.weight,
        )
    }
}

impl<T: PartialEq> PartialEq for Edge<T> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl<T: Eq> Eq for Edge<T> {}

impl<T: Ord> PartialOrd for Edge<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for Edge<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.source.cmp(&other.source)
    }
}

/// Renders as `<destination> <weight>`, the form used in adjacency listings.
impl<T: fmt::Display> fmt::Display for Edge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.destination, self.weight)
    }
}

/// Whether an added connection is one-way or two-way
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// One record, source to destination
    Directed,
    /// Two records with the same weight, one in each direction
    Undirected,
}
