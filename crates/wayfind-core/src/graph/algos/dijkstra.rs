//! Dijkstra shortest paths
//!
//! Min-priority queue keyed by tentative distance, with lazy deletion
//! instead of decrease-key: stale entries are skipped when popped. Ties
//! break by vertex name so pop order is reproducible.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap, HashSet};

use crate::error::{GraphError, Result};
use crate::graph::types::ShortestPath;
use crate::graph::{EdgeStore, Graph};

use super::shared::{reconstruct_path, validate_weight};

/// Heap entry ordered by accumulated cost, then vertex name
#[derive(Debug, Clone, PartialEq)]
pub struct HeapEntry {
    pub cost: f64,
    pub name: String,
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.name.cmp(&other.name))
    }
}

/// Shortest path between two vertices under non-negative weights
///
/// An unreachable destination returns the infinite-cost sentinel. A negative
/// weight surfaces as `NegativeWeightRejected` at the moment the edge would
/// be relaxed, not during graph construction.
#[tracing::instrument(skip(graph), fields(order = graph.order()))]
pub fn dijkstra<S: EdgeStore>(
    graph: &Graph<S>,
    start: &str,
    destination: &str,
) -> Result<ShortestPath> {
    for name in [start, destination] {
        if !graph.contains(name) {
            return Err(GraphError::unknown_vertex(name));
        }
    }

    let mut distances: BTreeMap<String, f64> = graph
        .vertex_names()
        .map(|name| (name.to_string(), f64::INFINITY))
        .collect();
    distances.insert(start.to_string(), 0.0);

    let mut predecessors: BTreeMap<String, String> = BTreeMap::new();
    let mut finalized: HashSet<String> = HashSet::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        cost: 0.0,
        name: start.to_string(),
    }));

    while let Some(Reverse(HeapEntry {
        cost,
        name: current,
    })) = heap.pop()
    {
        if !finalized.insert(current.clone()) {
            // stale entry; the vertex was already settled at a lower cost
            continue;
        }

        let Some(vertex) = graph.vertex(&current) else {
            continue;
        };
        for neighbor in vertex.neighbors() {
            if finalized.contains(neighbor) {
                continue;
            }

            let weight = validate_weight(&current, neighbor, graph.weight(&current, neighbor))?;
            let candidate = cost + weight;
            let known = distances.get(neighbor).copied().unwrap_or(f64::INFINITY);
            if candidate < known {
                distances.insert(neighbor.clone(), candidate);
                predecessors.insert(neighbor.clone(), current.clone());
                heap.push(Reverse(HeapEntry {
                    cost: candidate,
                    name: neighbor.clone(),
                }));
            }
        }
    }

    let cost = distances
        .get(destination)
        .copied()
        .unwrap_or(f64::INFINITY);
    tracing::debug!(cost, "dijkstra complete");

    match reconstruct_path(&predecessors, start, destination) {
        Some(path) if cost.is_finite() => Ok(ShortestPath { cost, path }),
        _ => Ok(ShortestPath::unreachable()),
    }
}

#[cfg(test)]
mod tests;
