use super::*;
use crate::error::GraphError;
use crate::graph::algos::testutil::{directed_graph_with_vertices, graph_with_vertices, path_cost};

#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        cost: 1.0,
        name: "A".to_string(),
    };
    let entry2 = HeapEntry {
        cost: 2.0,
        name: "B".to_string(),
    };
    let entry3 = HeapEntry {
        cost: 1.0,
        name: "C".to_string(),
    };

    // lower cost compares as less
    assert_eq!(entry1.cmp(&entry2), std::cmp::Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), std::cmp::Ordering::Greater);

    // equal costs fall back to name order
    assert_eq!(entry1.cmp(&entry3), std::cmp::Ordering::Less);
    assert_eq!(entry1.cmp(&entry1.clone()), std::cmp::Ordering::Equal);
}

#[test]
fn test_direct_edge() {
    let mut graph = graph_with_vertices();
    graph.add_edge("A", "B", 5.0);

    let result = dijkstra(&graph, "A", "B").unwrap();

    assert_eq!(result.cost, 5.0);
    assert_eq!(result.path, ["A", "B"]);
}

#[test]
fn test_shortcut_beats_direct_edge() {
    let mut graph = graph_with_vertices();
    graph.add_edge("A", "B", 10.0);
    graph.add_edge("A", "C", 3.0);
    graph.add_edge("C", "B", 2.0);

    let result = dijkstra(&graph, "A", "B").unwrap();

    assert_eq!(result.cost, 5.0);
    assert_eq!(result.path, ["A", "C", "B"]);
}

#[test]
fn test_start_equals_destination() {
    let graph = graph_with_vertices();

    let result = dijkstra(&graph, "A", "A").unwrap();

    assert_eq!(result.cost, 0.0);
    assert_eq!(result.path, ["A"]);
}

#[test]
fn test_unreachable_destination_is_sentinel() {
    let mut graph = graph_with_vertices();
    graph.add_edge("A", "B", 1.0);
    graph.add_edge("C", "D", 1.0);

    let result = dijkstra(&graph, "A", "D").unwrap();

    assert_eq!(result.cost, f64::INFINITY);
    assert!(result.path.is_empty());
    assert!(!result.is_reachable());
}

#[test]
fn test_negative_weight_rejected_at_relaxation() {
    let mut graph = graph_with_vertices();
    graph.add_edge("A", "B", -2.0);

    assert!(matches!(
        dijkstra(&graph, "A", "B"),
        Err(GraphError::NegativeWeightRejected { .. })
    ));
}

#[test]
fn test_equal_cost_tie_breaks_by_name() {
    let mut graph = graph_with_vertices();
    graph.add_edge("A", "B", 1.0);
    graph.add_edge("A", "C", 1.0);
    graph.add_edge("B", "D", 1.0);
    graph.add_edge("C", "D", 1.0);

    let result = dijkstra(&graph, "A", "D").unwrap();

    assert_eq!(result.cost, 2.0);
    assert_eq!(result.path, ["A", "B", "D"]);
}

#[test]
fn test_reported_cost_matches_path_weights() {
    let mut graph = graph_with_vertices();
    graph.add_edge("A", "B", 1.5);
    graph.add_edge("B", "C", 2.25);
    graph.add_edge("C", "E", 0.75);
    graph.add_edge("A", "E", 10.0);

    let result = dijkstra(&graph, "A", "E").unwrap();

    assert_eq!(result.cost, path_cost(&graph, &result.path));
}

#[test]
fn test_directed_edges_respect_orientation() {
    let mut graph = directed_graph_with_vertices(&["A", "B"]);
    graph.add_edge("A", "B", 2.0);

    let forward = dijkstra(&graph, "A", "B").unwrap();
    assert_eq!(forward.cost, 2.0);

    let backward = dijkstra(&graph, "B", "A").unwrap();
    assert!(!backward.is_reachable());
}

#[test]
fn test_unknown_endpoints_are_errors() {
    let graph = graph_with_vertices();

    assert!(matches!(
        dijkstra(&graph, "Z", "A"),
        Err(GraphError::UnknownVertex(_))
    ));
    assert!(matches!(
        dijkstra(&graph, "A", "Z"),
        Err(GraphError::UnknownVertex(_))
    ));
}
