use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use crate::error::Result;
use crate::graph::algos::shared::HeapEntry;
use crate::graph::types::{Edge, Payload, Vertex};
use crate::graph::Graph;

/// Candidate edges ordered by ascending weight
type EdgeQueue<T> = BinaryHeap<Reverse<HeapEntry<Edge<T>>>>;

/// Prim's minimum spanning tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prim;

impl Prim {
    pub fn new() -> Self {
        Prim
    }

    /// Build a minimum spanning tree of `graph`.
    ///
    /// Returns the total weight and a new graph holding every vertex of the
    /// input plus the chosen edges, each added as an undirected pair. The
    /// tree grows from the first vertex in key order; on a disconnected
    /// graph only that vertex's component is spanned and the other vertices
    /// are left without edges.
    #[tracing::instrument(skip_all, fields(vertices = graph.vertex_count()))]
    pub fn produce_minimum_spanning_tree_for<T: Payload>(
        &self,
        graph: &Graph<T>,
    ) -> Result<(f64, Graph<T>)> {
        let mut tree = Graph::new();
        tree.copy_vertices_from(graph);

        let Some(start) = graph.first_vertex() else {
            return Ok((0.0, tree));
        };

        let mut total = 0.0;
        let mut visited = BTreeSet::from([start.clone()]);
        let mut queue = EdgeQueue::new();
        let mut sequence = 0u64;
        add_available_edges(graph, start, &visited, &mut queue, &mut sequence);

        while let Some(Reverse(HeapEntry { item: edge, .. })) = queue.pop() {
            if visited.contains(&edge.destination) {
                continue;
            }
            visited.insert(edge.destination.clone());
            total += edge.weight;
            tree.add_undirected_edge(&edge.source, &edge.destination, edge.weight)?;
            add_available_edges(
                graph,
                &edge.destination,
                &visited,
                &mut queue,
                &mut sequence,
            );
        }

        let uncovered = graph.vertex_count() - visited.len();
        if uncovered > 0 {
            tracing::warn!(
                uncovered,
                spanned = visited.len(),
                "graph is disconnected; spanning tree covers only the start component"
            );
        }
        tracing::debug!(total, edges = visited.len() - 1, "minimum_spanning_tree");

        Ok((total, tree))
    }
}

/// Queue every edge of `vertex` that leads out of the visited set.
fn add_available_edges<T: Payload>(
    graph: &Graph<T>,
    vertex: &Vertex<T>,
    visited: &BTreeSet<Vertex<T>>,
    queue: &mut EdgeQueue<T>,
    sequence: &mut u64,
) {
    for edge in graph.neighbours(vertex) {
        if !visited.contains(&edge.destination) {
            queue.push(Reverse(HeapEntry::new(edge.weight, *sequence, edge.clone())));
            *sequence += 1;
        }
    }
}
