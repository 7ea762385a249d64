//! Depth-first traversal with edge classification
//!
//! Iterative formulation: an explicit frame stack replaces recursion, and a
//! single context struct carries the clock, state machine, classification map
//! and cycle flag, so traversal depth is bounded by the heap rather than the
//! call stack.

use std::collections::BTreeMap;

use crate::error::{GraphError, Result};
use crate::graph::types::{DfsResult, EdgeClass, EdgePair};
use crate::graph::{EdgeStore, Graph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VertexState {
    Unvisited,
    Visiting,
    Visited,
}

/// Mutable traversal state threaded through every visit
struct DfsContext {
    clock: u32,
    state: BTreeMap<String, VertexState>,
    discovery: BTreeMap<String, u32>,
    finish: BTreeMap<String, u32>,
    predecessors: BTreeMap<String, Option<String>>,
    classification: BTreeMap<EdgePair, EdgeClass>,
    visit_order: Vec<String>,
    has_cycle: bool,
}

impl DfsContext {
    fn new<S: EdgeStore>(graph: &Graph<S>) -> Self {
        let mut state = BTreeMap::new();
        let mut predecessors = BTreeMap::new();
        for name in graph.vertex_names() {
            state.insert(name.to_string(), VertexState::Unvisited);
            predecessors.insert(name.to_string(), None);
        }
        DfsContext {
            clock: 0,
            state,
            discovery: BTreeMap::new(),
            finish: BTreeMap::new(),
            predecessors,
            classification: BTreeMap::new(),
            visit_order: Vec::new(),
            has_cycle: false,
        }
    }

    fn state_of(&self, name: &str) -> VertexState {
        self.state
            .get(name)
            .copied()
            .unwrap_or(VertexState::Unvisited)
    }

    fn discovery_of(&self, name: &str) -> u32 {
        self.discovery.get(name).copied().unwrap_or(0)
    }

    fn discover(&mut self, name: &str) {
        self.state.insert(name.to_string(), VertexState::Visiting);
        self.clock += 1;
        self.discovery.insert(name.to_string(), self.clock);
        self.visit_order.push(name.to_string());
    }

    fn retire(&mut self, name: &str) {
        self.state.insert(name.to_string(), VertexState::Visited);
        self.clock += 1;
        self.finish.insert(name.to_string(), self.clock);
    }
}

/// One explicit-stack frame: a vertex, its DFS-tree parent and a cursor into
/// its neighbor list
struct Frame {
    name: String,
    parent: Option<String>,
    neighbors: Vec<String>,
    next: usize,
}

fn frame_for<S: EdgeStore>(graph: &Graph<S>, name: &str, parent: Option<String>) -> Frame {
    let neighbors = graph
        .vertex(name)
        .map(|vertex| vertex.neighbors().to_vec())
        .unwrap_or_default();
    Frame {
        name: name.to_string(),
        parent,
        neighbors,
        next: 0,
    }
}

/// Visit everything reachable from `root`, classifying edges on the way
fn visit<S: EdgeStore>(graph: &Graph<S>, root: &str, ctx: &mut DfsContext) {
    ctx.discover(root);
    let mut stack = vec![frame_for(graph, root, None)];

    loop {
        let Some(frame) = stack.last_mut() else { break };

        if frame.next >= frame.neighbors.len() {
            let done = frame.name.clone();
            stack.pop();
            ctx.retire(&done);
            continue;
        }

        let current = frame.name.clone();
        let parent = frame.parent.clone();
        let neighbor = frame.neighbors[frame.next].clone();
        frame.next += 1;

        let pair = EdgePair::new(&current, &neighbor);
        match ctx.state_of(&neighbor) {
            VertexState::Unvisited => {
                ctx.predecessors
                    .insert(neighbor.clone(), Some(current.clone()));
                ctx.classification.insert(pair, EdgeClass::Tree);
                ctx.discover(&neighbor);
                stack.push(frame_for(graph, &neighbor, Some(current)));
            }
            VertexState::Visiting => {
                // an edge back to any open vertex except the direct parent
                // closes a cycle; the parent exception keeps a single
                // undirected edge from reading as one
                if parent.as_deref() != Some(neighbor.as_str()) {
                    ctx.classification.entry(pair).or_insert(EdgeClass::Back);
                    ctx.has_cycle = true;
                }
            }
            VertexState::Visited => {
                if !ctx.classification.contains_key(&pair) {
                    // parenthesis structure: a finished neighbor discovered
                    // after `current` closed inside its interval, hence a
                    // descendant
                    let class = if ctx.discovery_of(&current) < ctx.discovery_of(&neighbor) {
                        EdgeClass::Forward
                    } else {
                        EdgeClass::Cross
                    };
                    ctx.classification.insert(pair, class);
                }
            }
        }
    }
}

/// Depth-first search from `start`, covering the whole vertex set
///
/// After the start's traversal finishes, every still-unvisited vertex opens
/// a new depth-first call in ascending name order; `components` records one
/// vertex sequence per call, the start's first.
#[tracing::instrument(skip(graph), fields(order = graph.order()))]
pub fn dfs<S: EdgeStore>(graph: &Graph<S>, start: &str) -> Result<DfsResult> {
    if !graph.contains(start) {
        return Err(GraphError::unknown_vertex(start));
    }

    let mut ctx = DfsContext::new(graph);
    let mut components: Vec<Vec<String>> = Vec::new();

    visit(graph, start, &mut ctx);
    components.push(ctx.visit_order.clone());

    let names: Vec<String> = graph.vertex_names().map(str::to_string).collect();
    for name in names {
        if ctx.state_of(&name) == VertexState::Unvisited {
            let already_visited = ctx.visit_order.len();
            visit(graph, &name, &mut ctx);
            components.push(ctx.visit_order[already_visited..].to_vec());
        }
    }

    tracing::debug!(
        components = components.len(),
        has_cycle = ctx.has_cycle,
        "dfs complete"
    );

    Ok(DfsResult {
        discovery: ctx.discovery,
        finish: ctx.finish,
        predecessors: ctx.predecessors,
        edge_classification: ctx.classification,
        visit_order: ctx.visit_order,
        has_cycle: ctx.has_cycle,
        components,
    })
}
