//! Breadth-first and depth-first traversal

use std::collections::{BTreeSet, VecDeque};

use crate::error::Result;
use crate::graph::types::{Payload, Vertex};
use crate::graph::Graph;

impl<T: Payload> Graph<T> {
    /// Vertices reachable from `start` in breadth-first discovery order.
    pub fn breadth_first_search_from(&self, start: &Vertex<T>) -> Result<Vec<Vertex<T>>> {
        self.ensure_contains(start)?;
        Ok(self.breadth_first_order(start))
    }

    /// Breadth-first walk from a vertex already known to be in the graph.
    pub(crate) fn breadth_first_order(&self, start: &Vertex<T>) -> Vec<Vertex<T>> {
        let mut queue = VecDeque::from([start.clone()]);
        let mut enqueued = BTreeSet::from([start.clone()]);
        let mut visited = Vec::new();

        while let Some(vertex) = queue.pop_front() {
            for edge in self.neighbours(&vertex) {
                if enqueued.insert(edge.destination.clone()) {
                    queue.push_back(edge.destination.clone());
                }
            }
            visited.push(self.stored(&vertex));
        }

        tracing::trace!(visited = visited.len(), "breadth_first_search");
        visited
    }

    /// Vertices reachable from `start` in depth-first order.
    ///
    /// At each step the search descends into the first unvisited neighbour
    /// in edge-list order, and backs up only when a vertex has none left.
    pub fn depth_first_search_from(&self, start: &Vertex<T>) -> Result<Vec<Vertex<T>>> {
        self.ensure_contains(start)?;

        // Each frame remembers how far through its edge list it has looked.
        let mut stack: Vec<(Vertex<T>, usize)> = vec![(start.clone(), 0)];
        let mut pushed = BTreeSet::from([start.clone()]);
        let mut visited = vec![self.stored(start)];

        while let Some(frame) = stack.last_mut() {
            let edges = self.neighbours(&frame.0);
            let next = edges[frame.1..]
                .iter()
                .position(|edge| !pushed.contains(&edge.destination));

            match next {
                Some(offset) => {
                    let destination = edges[frame.1 + offset].destination.clone();
                    frame.1 += offset + 1;
                    pushed.insert(destination.clone());
                    visited.push(self.stored(&destination));
                    stack.push((destination, 0));
                }
                None => {
                    stack.pop();
                }
            }
        }

        tracing::trace!(visited = visited.len(), "depth_first_search");
        Ok(visited)
    }
}
