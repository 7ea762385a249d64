//! Bellman-Ford shortest paths with negative-cycle detection
//!
//! Works against directed and undirected graphs through the edge store's
//! uniform triple iteration: undirected edges relax in both directions,
//! directed edges once. After the relaxation passes, one further full edge
//! scan serves as the detection pass.

use std::collections::BTreeMap;

use crate::error::{GraphError, Result};
use crate::graph::types::{BellmanFordResult, ShortestPath};
use crate::graph::{EdgeStore, Graph};

use super::shared::reconstruct_path;

/// Single-source distances and predecessors over every vertex
///
/// A detected negative cycle is reported through the flag in this mode,
/// never as an error.
#[tracing::instrument(skip(graph), fields(order = graph.order()))]
pub fn bellman_ford<S: EdgeStore>(graph: &Graph<S>, start: &str) -> Result<BellmanFordResult> {
    if !graph.contains(start) {
        return Err(GraphError::unknown_vertex(start));
    }

    let mut distances: BTreeMap<String, f64> = graph
        .vertex_names()
        .map(|name| (name.to_string(), f64::INFINITY))
        .collect();
    distances.insert(start.to_string(), 0.0);
    let mut predecessors: BTreeMap<String, String> = BTreeMap::new();

    let triples = graph.edge_triples();
    let passes = graph.order().saturating_sub(1);
    for pass in 0..passes {
        let mut updated = false;
        for (origin, destination, weight) in &triples {
            let from_cost = distances.get(origin).copied().unwrap_or(f64::INFINITY);
            let candidate = from_cost + weight;
            if candidate < distances.get(destination).copied().unwrap_or(f64::INFINITY) {
                distances.insert(destination.clone(), candidate);
                predecessors.insert(destination.clone(), origin.clone());
                updated = true;
            }
        }
        if !updated {
            tracing::trace!(pass, "relaxation settled early");
            break;
        }
    }

    // detection pass: any remaining improvement means a negative cycle
    // reachable from the start
    let mut has_negative_cycle = false;
    for (origin, destination, weight) in &triples {
        let from_cost = distances.get(origin).copied().unwrap_or(f64::INFINITY);
        if from_cost + weight < distances.get(destination).copied().unwrap_or(f64::INFINITY) {
            has_negative_cycle = true;
            break;
        }
    }

    tracing::debug!(has_negative_cycle, "bellman-ford complete");

    Ok(BellmanFordResult {
        distances,
        predecessors,
        has_negative_cycle,
    })
}

/// Shortest path to a destination
///
/// A detected negative cycle makes the query ill-posed and raises
/// `NegativeCycleDetected`; a merely unreachable destination returns the
/// infinite-cost sentinel.
#[tracing::instrument(skip(graph))]
pub fn bellman_ford_path<S: EdgeStore>(
    graph: &Graph<S>,
    start: &str,
    destination: &str,
) -> Result<ShortestPath> {
    if !graph.contains(destination) {
        return Err(GraphError::unknown_vertex(destination));
    }

    let result = bellman_ford(graph, start)?;
    if result.has_negative_cycle {
        return Err(GraphError::NegativeCycleDetected {
            start: start.to_string(),
        });
    }

    let cost = result
        .distances
        .get(destination)
        .copied()
        .unwrap_or(f64::INFINITY);
    match reconstruct_path(&result.predecessors, start, destination) {
        Some(path) if cost.is_finite() => Ok(ShortestPath { cost, path }),
        _ => Ok(ShortestPath::unreachable()),
    }
}
