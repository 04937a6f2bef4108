//! Structural queries: path counting, connectivity, cycles and topological order
//!
//! The depth-first algorithms here keep an explicit stack of
//! `(vertex, next edge index)` frames instead of recursing, so deep graphs
//! cannot exhaust the call stack.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::graph::types::{Payload, Vertex};
use crate::graph::Graph;

/// Outcome of a depth-first visit used by the topological sort
enum Descent {
    Finished,
    Cycle,
}

impl<T: Payload> Graph<T> {
    /// Count the simple paths from `source` to `destination`.
    ///
    /// Exhaustive backtracking: the cost is exponential in the worst case.
    /// A vertex is counted as one path to itself.
    pub fn number_of_paths_from(
        &self,
        source: &Vertex<T>,
        destination: &Vertex<T>,
    ) -> Result<usize> {
        self.ensure_contains(source)?;
        if source == destination {
            return Ok(1);
        }

        let mut on_path = BTreeSet::from([source.clone()]);
        let mut stack: Vec<(Vertex<T>, usize)> = vec![(source.clone(), 0)];
        let mut count = 0usize;

        while let Some(frame) = stack.last_mut() {
            match self.neighbours(&frame.0).get(frame.1) {
                Some(edge) => {
                    frame.1 += 1;
                    let next = &edge.destination;
                    if on_path.contains(next) {
                        continue;
                    }
                    if next == destination {
                        count += 1;
                        continue;
                    }
                    on_path.insert(next.clone());
                    stack.push((next.clone(), 0));
                }
                None => {
                    if let Some((vertex, _)) = stack.pop() {
                        on_path.remove(&vertex);
                    }
                }
            }
        }

        tracing::debug!(count, "number_of_paths");
        Ok(count)
    }

    /// True when a breadth-first search from the first vertex misses some
    /// vertex. An empty graph counts as connected.
    pub fn is_disconnected(&self) -> bool {
        let Some(first) = self.first_vertex() else {
            return false;
        };
        self.breadth_first_order(first).len() < self.vertex_count()
    }

    /// Depth-first cycle check from `source`.
    ///
    /// An edge into a vertex that is still on the search stack is a cycle.
    /// Each undirected edge is stored as two directed edges, so any
    /// undirected connection reports a cycle of length two.
    pub fn has_cycle(&self, source: &Vertex<T>) -> Result<bool> {
        self.ensure_contains(source)?;

        let mut gray = BTreeSet::from([source.clone()]);
        let mut black = BTreeSet::new();
        let mut stack: Vec<(Vertex<T>, usize)> = vec![(source.clone(), 0)];

        while let Some(frame) = stack.last_mut() {
            match self.neighbours(&frame.0).get(frame.1) {
                Some(edge) => {
                    frame.1 += 1;
                    let next = &edge.destination;
                    if gray.contains(next) {
                        tracing::debug!(at = ?next.data(), "cycle_found");
                        return Ok(true);
                    }
                    if !black.contains(next) {
                        gray.insert(next.clone());
                        stack.push((next.clone(), 0));
                    }
                }
                None => {
                    if let Some((vertex, _)) = stack.pop() {
                        gray.remove(&vertex);
                        black.insert(vertex);
                    }
                }
            }
        }

        Ok(false)
    }

    /// Topological order of every vertex, dependencies first.
    ///
    /// Returns an empty vector if the graph has a cycle anywhere, which is
    /// indistinguishable from the result for an empty graph.
    pub fn topological_sort(&self) -> Vec<Vertex<T>> {
        let mut gray = BTreeSet::new();
        let mut black = BTreeSet::new();
        let mut finished = Vec::with_capacity(self.vertex_count());

        for root in self.adjacencies().keys() {
            if black.contains(root) {
                continue;
            }
            if let Descent::Cycle =
                self.topological_visit(root, &mut gray, &mut black, &mut finished)
            {
                tracing::debug!(root = ?root.data(), "topological_sort_cycle");
                return Vec::new();
            }
        }

        finished.reverse();
        finished
    }

    fn topological_visit(
        &self,
        root: &Vertex<T>,
        gray: &mut BTreeSet<Vertex<T>>,
        black: &mut BTreeSet<Vertex<T>>,
        finished: &mut Vec<Vertex<T>>,
    ) -> Descent {
        gray.insert(root.clone());
        let mut stack: Vec<(Vertex<T>, usize)> = vec![(root.clone(), 0)];

        while let Some(frame) = stack.last_mut() {
            match self.neighbours(&frame.0).get(frame.1) {
                Some(edge) => {
                    frame.1 += 1;
                    let next = &edge.destination;
                    if gray.contains(next) {
                        return Descent::Cycle;
                    }
                    if !black.contains(next) {
                        gray.insert(next.clone());
                        stack.push((next.clone(), 0));
                    }
                }
                None => {
                    if let Some((vertex, _)) = stack.pop() {
                        gray.remove(&vertex);
                        black.insert(vertex.clone());
                        finished.push(self.stored(&vertex));
                    }
                }
            }
        }

        Descent::Finished
    }
}
