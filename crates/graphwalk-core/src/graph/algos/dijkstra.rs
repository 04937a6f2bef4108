use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::algos::shared::HeapEntry;
use crate::graph::types::{Edge, Payload, Vertex};
use crate::graph::Graph;

/// How a path's edge weights combine into its distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathMetric {
    /// Sum of the edge weights (classic shortest path)
    #[default]
    Total,
    /// Largest edge weight on the path (lowest-highest-point route)
    Bottleneck,
}

impl PathMetric {
    /// Distance after extending a path of `distance` by an edge of `weight`
    pub fn extend(self, distance: f64, weight: f64) -> f64 {
        match self {
            PathMetric::Total => distance + weight,
            PathMetric::Bottleneck => distance.max(weight),
        }
    }

    /// Distance of a whole route; `0.0` for an empty one
    pub fn measure<T>(self, route: &[Edge<T>]) -> f64 {
        route
            .iter()
            .fold(0.0, |distance, edge| self.extend(distance, edge.weight))
    }
}

/// How a vertex was reached in a shortest-path tree
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "edge", rename_all = "lowercase")]
pub enum Visit<T> {
    /// The vertex the search started from
    Start,
    /// Reached over this edge
    Edge(Edge<T>),
}

/// Shortest-path tree: every reached vertex mapped to how it was reached.
#[derive(Debug, Clone)]
pub struct ShortestPaths<T> {
    visits: BTreeMap<Vertex<T>, Visit<T>>,
}

impl<T> Default for ShortestPaths<T> {
    fn default() -> Self {
        ShortestPaths {
            visits: BTreeMap::new(),
        }
    }
}

impl<T: Payload> ShortestPaths<T> {
    pub fn get(&self, vertex: &Vertex<T>) -> Option<&Visit<T>> {
        self.visits.get(vertex)
    }

    pub fn contains(&self, vertex: &Vertex<T>) -> bool {
        self.visits.contains_key(vertex)
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// The start vertex, if the tree is not empty
    pub fn start(&self) -> Option<&Vertex<T>> {
        self.visits
            .iter()
            .find(|(_, visit)| matches!(visit, Visit::Start))
            .map(|(vertex, _)| vertex)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Vertex<T>, &Visit<T>)> {
        self.visits.iter()
    }
}

/// Single-source shortest paths over a borrowed graph.
///
/// Edge weights must be non-negative; a negative weight met during the
/// search is reported as an error.
#[derive(Debug, Clone)]
pub struct Dijkstra<'g, T> {
    graph: &'g Graph<T>,
    metric: PathMetric,
}

impl<'g, T: Payload> Dijkstra<'g, T> {
    pub fn new(graph: &'g Graph<T>) -> Self {
        Dijkstra {
            graph,
            metric: PathMetric::default(),
        }
    }

    pub fn with_metric(mut self, metric: PathMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Build the shortest-path tree rooted at `start`.
    ///
    /// A vertex's recorded visit is replaced only by a strictly shorter
    /// path, so among equally short paths the first one found is kept.
    #[tracing::instrument(skip(self, start), fields(start = ?start.data(), metric = ?self.metric))]
    pub fn shortest_paths_from(&self, start: &Vertex<T>) -> Result<ShortestPaths<T>> {
        self.graph.ensure_contains(start)?;
        let start = self.graph.stored(start);

        let mut visits = BTreeMap::from([(start.clone(), Visit::Start)]);
        let mut distances = BTreeMap::from([(start.clone(), 0.0)]);
        let mut heap = BinaryHeap::from([Reverse(HeapEntry::new(0.0, 0, start))]);
        let mut sequence = 1u64;

        while let Some(Reverse(HeapEntry {
            cost: distance,
            item: vertex,
            ..
        })) = heap.pop()
        {
            // Skip entries superseded by a shorter path found after the push.
            if distances.get(&vertex).is_some_and(|best| distance > *best) {
                continue;
            }

            for edge in self.graph.neighbours(&vertex) {
                if edge.weight < 0.0 {
                    return Err(GraphError::NegativeWeight {
                        source_vertex: format!("{:?}", edge.source.data()),
                        destination: format!("{:?}", edge.destination.data()),
                        weight: edge.weight,
                    });
                }

                let candidate = self.metric.extend(distance, edge.weight);
                let improves = distances
                    .get(&edge.destination)
                    .is_none_or(|current| candidate < *current);

                if improves {
                    distances.insert(edge.destination.clone(), candidate);
                    visits.insert(edge.destination.clone(), Visit::Edge(edge.clone()));
                    heap.push(Reverse(HeapEntry::new(
                        candidate,
                        sequence,
                        edge.destination.clone(),
                    )));
                    sequence += 1;
                }
            }
        }

        tracing::debug!(reached = visits.len(), "shortest_paths_built");
        Ok(ShortestPaths { visits })
    }

    /// Edges leading from the start to `destination`, last edge first.
    ///
    /// An empty tree gives an empty route. A destination missing from a
    /// non-empty tree is an `Unreached` error.
    pub fn route(
        &self,
        destination: &Vertex<T>,
        paths: &ShortestPaths<T>,
    ) -> Result<Vec<Edge<T>>> {
        let mut route = Vec::new();
        if paths.is_empty() {
            return Ok(route);
        }

        let mut visit = paths
            .get(destination)
            .ok_or_else(|| GraphError::unreached(destination.data()))?;

        while let Visit::Edge(edge) = visit {
            route.push(edge.clone());
            visit = paths
                .get(&edge.source)
                .ok_or_else(|| GraphError::unreached(edge.source.data()))?;
            // A chain longer than the tree means the map was not built by
            // `shortest_paths_from`; stop rather than loop forever.
            if route.len() > paths.len() {
                return Err(GraphError::unreached(destination.data()));
            }
        }

        Ok(route)
    }

    /// Shortest route to `destination` in reverse order (destination first);
    /// walk the result backwards to go from the start.
    pub fn shortest_path_to(
        &self,
        destination: &Vertex<T>,
        paths: &ShortestPaths<T>,
    ) -> Result<Vec<Edge<T>>> {
        self.route(destination, paths)
    }

    /// Distance to `destination` under this engine's metric; `0.0` when it
    /// was not reached.
    pub fn distance(&self, destination: &Vertex<T>, paths: &ShortestPaths<T>) -> f64 {
        self.route(destination, paths)
            .map(|route| self.metric.measure(&route))
            .unwrap_or(0.0)
    }
}
