//! Utilities shared by the shortest-path algorithms

use std::collections::{BTreeMap, HashSet};

use crate::error::{GraphError, Result};

/// Reject a negative weight at the point it would be relaxed
pub fn validate_weight(from: &str, to: &str, weight: f64) -> Result<f64> {
    if weight < 0.0 {
        return Err(GraphError::NegativeWeightRejected {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        });
    }
    Ok(weight)
}

/// Walk the predecessor map back from `destination` to `start`
///
/// Returns `None` when the destination was never reached, or when the
/// predecessor chain revisits a vertex before arriving at `start`, which can
/// happen when a negative cycle sits off the direct relaxation chain.
pub fn reconstruct_path(
    predecessors: &BTreeMap<String, String>,
    start: &str,
    destination: &str,
) -> Option<Vec<String>> {
    if destination == start {
        return Some(vec![start.to_string()]);
    }
    if !predecessors.contains_key(destination) {
        return None;
    }

    let mut path = vec![destination.to_string()];
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(destination);

    let mut current = destination;
    while let Some(previous) = predecessors.get(current) {
        if !seen.insert(previous) {
            // predecessor chain loops without reaching the start
            return None;
        }
        path.push(previous.clone());
        if previous == start {
            path.reverse();
            return Some(path);
        }
        current = previous;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predecessors(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(vertex, previous)| (vertex.to_string(), previous.to_string()))
            .collect()
    }

    #[test]
    fn test_reconstructs_chain_in_order() {
        let preds = predecessors(&[("B", "A"), ("C", "B")]);
        assert_eq!(
            reconstruct_path(&preds, "A", "C"),
            Some(vec!["A".to_string(), "B".to_string(), "C".to_string()])
        );
    }

    #[test]
    fn test_start_equals_destination() {
        let preds = BTreeMap::new();
        assert_eq!(
            reconstruct_path(&preds, "A", "A"),
            Some(vec!["A".to_string()])
        );
    }

    #[test]
    fn test_unreached_destination_is_none() {
        let preds = predecessors(&[("B", "A")]);
        assert_eq!(reconstruct_path(&preds, "A", "Z"), None);
    }

    #[test]
    fn test_looping_chain_is_none() {
        // B <- C <- B: never reaches A
        let preds = predecessors(&[("B", "C"), ("C", "B")]);
        assert_eq!(reconstruct_path(&preds, "A", "B"), None);
    }

    #[test]
    fn test_validate_weight() {
        assert!(validate_weight("A", "B", 0.0).is_ok());
        assert!(validate_weight("A", "B", 2.5).is_ok());
        assert!(validate_weight("A", "B", -0.1).is_err());
    }
}
