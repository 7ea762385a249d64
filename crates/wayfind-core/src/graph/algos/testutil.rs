//! Shared fixtures for algorithm tests

use crate::graph::{DirectedGraph, EdgeStore, Graph, Vertex};

/// Undirected graph with vertices A through E and no edges
pub(crate) fn graph_with_vertices() -> Graph {
    let mut graph = Graph::new();
    for name in ["A", "B", "C", "D", "E"] {
        assert!(graph.add_vertex(Vertex::new(name)));
    }
    graph
}

/// Directed graph over the given vertex names and no edges
pub(crate) fn directed_graph_with_vertices(names: &[&str]) -> DirectedGraph {
    let mut graph = DirectedGraph::new();
    for name in names {
        assert!(graph.add_vertex(Vertex::new(*name)));
    }
    graph
}

/// Sum of edge weights along consecutive path pairs
pub(crate) fn path_cost<S: EdgeStore>(graph: &Graph<S>, path: &[String]) -> f64 {
    path.windows(2)
        .map(|pair| graph.weight(&pair[0], &pair[1]))
        .sum()
}
