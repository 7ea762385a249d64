//! Weighted graphs over named vertices
//!
//! `Graph` owns vertices, an edge-attribute store and adjacency sets, and
//! answers connectivity and shortest-path queries:
//! - Construction and mutation: `add_vertex`, `add_edge`, `remove_edge`
//! - Introspection: `neighbors`, `order`, `size`, `density`, `subgraph`
//! - Queries: `bfs`, `dfs`, `shortest_path_dijkstra`, `shortest_path_bellman_ford`
//!
//! Orientation comes from the `EdgeStore` parameter: `Graph` defaults to the
//! symmetric store, `DirectedGraph` is the same type over ordered keys.

pub mod algos;
pub mod store;
pub mod types;
pub mod vertex;

pub use store::{DirectedEdges, EdgeAttrs, EdgeKey, EdgeStore, UndirectedEdges};
pub use types::{
    AttrValue, BellmanFordResult, BfsResult, DfsResult, EdgeClass, EdgePair, GraphMetrics,
    ShortestPath,
};
pub use vertex::Vertex;

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{GraphError, Result};

/// Weight used when an edge carries no explicit weight
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Weighted graph; orientation is fixed by the edge-store parameter
#[derive(Debug, Clone, Default)]
pub struct Graph<S: EdgeStore = UndirectedEdges> {
    vertices: BTreeMap<String, Vertex>,
    /// Neighbor sets, redundant with `Vertex::neighbors`, kept in sync
    adjacency: BTreeMap<String, BTreeSet<String>>,
    edges: S,
}

/// Graph whose edges are one-directional
pub type DirectedGraph = Graph<DirectedEdges>;

impl<S: EdgeStore> Graph<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vertices.contains_key(name)
    }

    pub fn vertex(&self, name: &str) -> Option<&Vertex> {
        self.vertices.get(name)
    }

    /// Vertex names in ascending lexical order
    pub fn vertex_names(&self) -> impl Iterator<Item = &str> {
        self.vertices.keys().map(String::as_str)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Insert a vertex with empty adjacency
    ///
    /// Returns `false` when a vertex of that name already exists or the
    /// vertex value is invalid (empty name).
    pub fn add_vertex(&mut self, vertex: Vertex) -> bool {
        if vertex.name().is_empty() || self.vertices.contains_key(vertex.name()) {
            return false;
        }

        let mut vertex = vertex;
        vertex.clear_neighbors();
        self.adjacency
            .insert(vertex.name().to_string(), BTreeSet::new());
        self.vertices.insert(vertex.name().to_string(), vertex);
        true
    }

    /// Insert or overwrite an edge between two existing vertices
    ///
    /// Adjacency updates are symmetric for undirected graphs and
    /// origin-sided for directed ones. Fails when either endpoint is absent
    /// or the endpoints coincide (vertices never neighbor themselves).
    pub fn add_edge(&mut self, u: &str, v: &str, weight: f64) -> bool {
        self.add_edge_with_attrs(u, v, weight, BTreeMap::new())
    }

    pub fn add_edge_with_attrs(
        &mut self,
        u: &str,
        v: &str,
        weight: f64,
        extra: BTreeMap<String, AttrValue>,
    ) -> bool {
        if u == v || !self.contains(u) || !self.contains(v) {
            return false;
        }

        if let Some(vertex) = self.vertices.get_mut(u) {
            vertex.add_neighbor(v);
        }
        if let Some(adjacent) = self.adjacency.get_mut(u) {
            adjacent.insert(v.to_string());
        }

        if !S::DIRECTED {
            if let Some(vertex) = self.vertices.get_mut(v) {
                vertex.add_neighbor(u);
            }
            if let Some(adjacent) = self.adjacency.get_mut(v) {
                adjacent.insert(u.to_string());
            }
        }

        self.edges.insert(u, v, EdgeAttrs::with_extra(weight, extra));
        true
    }

    /// Remove an edge; symmetric for undirected graphs
    ///
    /// Returns `false` when either endpoint is absent or no such edge was
    /// recorded on the origin side.
    pub fn remove_edge(&mut self, u: &str, v: &str) -> bool {
        if !self.contains(u) || !self.contains(v) {
            return false;
        }

        let mut removed = false;
        if let Some(vertex) = self.vertices.get_mut(u) {
            removed = vertex.remove_neighbor(v);
        }
        if let Some(adjacent) = self.adjacency.get_mut(u) {
            adjacent.remove(v);
        }

        if !S::DIRECTED {
            if let Some(vertex) = self.vertices.get_mut(v) {
                vertex.remove_neighbor(u);
            }
            if let Some(adjacent) = self.adjacency.get_mut(v) {
                adjacent.remove(u);
            }
        }

        self.edges.remove(u, v);
        removed
    }

    /// Edge weight, `f64::INFINITY` when no such edge exists
    pub fn weight(&self, u: &str, v: &str) -> f64 {
        self.edges.get(u, v).map_or(f64::INFINITY, |a| a.weight)
    }

    pub fn edge_attrs(&self, u: &str, v: &str) -> Option<&EdgeAttrs> {
        self.edges.get(u, v)
    }

    /// Stored edges as `(origin, destination, weight)` triples; undirected
    /// edges appear in both directions
    pub fn edge_triples(&self) -> Vec<(String, String, f64)> {
        self.edges.directed_triples()
    }

    /// Neighbor names in ascending lexical order
    pub fn neighbors(&self, name: &str) -> Result<Vec<String>> {
        let vertex = self
            .vertices
            .get(name)
            .ok_or_else(|| GraphError::unknown_vertex(name))?;
        Ok(vertex.neighbors().to_vec())
    }

    pub fn degree(&self, name: &str) -> Result<usize> {
        let vertex = self
            .vertices
            .get(name)
            .ok_or_else(|| GraphError::unknown_vertex(name))?;
        Ok(vertex.neighbors().len())
    }

    /// Set an attribute on an existing vertex
    pub fn set_vertex_attribute(
        &mut self,
        name: &str,
        key: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> bool {
        match self.vertices.get_mut(name) {
            Some(vertex) => {
                vertex.set_attribute(key, value);
                true
            }
            None => false,
        }
    }

    /// Induced subgraph over the given names, as an independent full copy
    ///
    /// Unknown names are silently skipped; an edge is copied only when both
    /// endpoints are included. The result shares no state with `self`.
    pub fn subgraph<I, T>(&self, names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let included: BTreeSet<String> = names
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();

        let mut sub = Self::default();
        for name in &included {
            if let Some(original) = self.vertices.get(name) {
                sub.add_vertex(Vertex::with_attributes(
                    name.as_str(),
                    original.attributes().clone(),
                ));
            }
        }

        for name in &included {
            let Some(original) = self.vertices.get(name) else {
                continue;
            };
            for neighbor in original.neighbors() {
                if !included.contains(neighbor) {
                    continue;
                }
                let (weight, extra) = match self.edges.get(name, neighbor) {
                    Some(attrs) => (attrs.weight, attrs.extra.clone()),
                    None => (DEFAULT_EDGE_WEIGHT, BTreeMap::new()),
                };
                sub.add_edge_with_attrs(name, neighbor, weight, extra);
            }
        }

        sub
    }

    /// Subgraph induced by a vertex and its immediate neighbors
    pub fn ego_network(&self, name: &str) -> Result<Self> {
        let mut names = self.neighbors(name)?;
        names.push(name.to_string());
        Ok(self.subgraph(names))
    }

    /// Vertex count
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// Edge count
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    /// Ratio of existing to possible edges, 0 for graphs of order < 2
    pub fn density(&self) -> f64 {
        let order = self.order();
        if order < 2 {
            return 0.0;
        }
        let ordered_pairs = (order * (order - 1)) as f64;
        if S::DIRECTED {
            self.size() as f64 / ordered_pairs
        } else {
            2.0 * self.size() as f64 / ordered_pairs
        }
    }

    pub fn metrics(&self) -> GraphMetrics {
        GraphMetrics {
            order: self.order(),
            size: self.size(),
            density: self.density(),
        }
    }

    /// Breadth-first traversal from `origin`
    pub fn bfs(&self, origin: &str) -> Result<BfsResult> {
        algos::bfs(self, origin)
    }

    /// Depth-first traversal from `origin`, covering the whole vertex set
    pub fn dfs(&self, origin: &str) -> Result<DfsResult> {
        algos::dfs(self, origin)
    }

    /// Shortest path under non-negative weights
    pub fn shortest_path_dijkstra(&self, origin: &str, destination: &str) -> Result<ShortestPath> {
        algos::dijkstra(self, origin, destination)
    }

    /// Shortest path tolerating negative weights; errors on a negative cycle
    pub fn shortest_path_bellman_ford(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<ShortestPath> {
        algos::bellman_ford_path(self, origin, destination)
    }

    /// Bellman-Ford distances to every vertex, with the negative-cycle flag
    pub fn bellman_ford_distances(&self, origin: &str) -> Result<BellmanFordResult> {
        algos::bellman_ford(self, origin)
    }
}
