//! Breadth-first traversal
//!
//! Layered expansion from a start vertex. A vertex is enqueued at most once
//! and neighbors expand in sorted adjacency order, so visit order, levels and
//! per-level child order are deterministic for a fixed graph.

use std::collections::{BTreeMap, HashSet, VecDeque};

use crate::error::{GraphError, Result};
use crate::graph::types::BfsResult;
use crate::graph::{EdgeStore, Graph};

/// Breadth-first search from `start`
///
/// Every vertex gets an entry: unreached ones keep level/distance
/// `f64::INFINITY`, no predecessor and an empty child list.
#[tracing::instrument(skip(graph), fields(order = graph.order()))]
pub fn bfs<S: EdgeStore>(graph: &Graph<S>, start: &str) -> Result<BfsResult> {
    if !graph.contains(start) {
        return Err(GraphError::unknown_vertex(start));
    }

    let mut levels: BTreeMap<String, f64> = BTreeMap::new();
    let mut distances: BTreeMap<String, f64> = BTreeMap::new();
    let mut predecessors: BTreeMap<String, Option<String>> = BTreeMap::new();
    let mut tree: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for name in graph.vertex_names() {
        levels.insert(name.to_string(), f64::INFINITY);
        distances.insert(name.to_string(), f64::INFINITY);
        predecessors.insert(name.to_string(), None);
        tree.insert(name.to_string(), Vec::new());
    }

    levels.insert(start.to_string(), 0.0);
    distances.insert(start.to_string(), 0.0);

    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(start.to_string());
    let mut queue: VecDeque<(String, f64)> = VecDeque::new();
    queue.push_back((start.to_string(), 0.0));
    let mut visit_order = vec![start.to_string()];

    while let Some((current, level)) = queue.pop_front() {
        let Some(vertex) = graph.vertex(&current) else {
            continue;
        };

        for neighbor in vertex.neighbors() {
            if visited.contains(neighbor) {
                continue;
            }
            visited.insert(neighbor.clone());
            levels.insert(neighbor.clone(), level + 1.0);
            distances.insert(neighbor.clone(), level + 1.0);
            predecessors.insert(neighbor.clone(), Some(current.clone()));
            if let Some(children) = tree.get_mut(&current) {
                children.push(neighbor.clone());
            }
            visit_order.push(neighbor.clone());
            queue.push_back((neighbor.clone(), level + 1.0));
        }
    }

    tracing::debug!(reached = visit_order.len(), "bfs complete");

    Ok(BfsResult {
        levels,
        distances,
        predecessors,
        tree,
        visit_order,
    })
}
