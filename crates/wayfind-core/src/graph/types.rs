//! Result records and shared value types for graph queries
//!
//! Everything a front end serializes lives here. Records derive `Serialize`
//! so reporters can emit JSON without reaching into algorithm internals.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Scalar attribute value carried by vertices and edges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Str(String),
    Int(i64),
    Float(f64),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Str(s) => write!(f, "{}", s),
            AttrValue::Int(i) => write!(f, "{}", i),
            AttrValue::Float(x) => write!(f, "{}", x),
        }
    }
}

/// Canonical, order-independent endpoint pair
///
/// DFS classifies each edge exactly once under this key regardless of which
/// endpoint's exploration reaches it first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgePair {
    a: String,
    b: String,
}

impl EdgePair {
    pub fn new(u: &str, v: &str) -> Self {
        if u <= v {
            EdgePair {
                a: u.to_string(),
                b: v.to_string(),
            }
        } else {
            EdgePair {
                a: v.to_string(),
                b: u.to_string(),
            }
        }
    }

    pub fn endpoints(&self) -> (&str, &str) {
        (&self.a, &self.b)
    }
}

impl fmt::Display for EdgePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.a, self.b)
    }
}

impl Serialize for EdgePair {
    // string form so classification maps serialize as JSON objects
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// DFS edge classification relative to discovery/finish intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeClass {
    Tree,
    Back,
    Forward,
    Cross,
}

impl fmt::Display for EdgeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeClass::Tree => write!(f, "tree"),
            EdgeClass::Back => write!(f, "back"),
            EdgeClass::Forward => write!(f, "forward"),
            EdgeClass::Cross => write!(f, "cross"),
        }
    }
}

/// Cost and vertex sequence of a reconstructed shortest path
///
/// An unreachable destination is `cost == f64::INFINITY` with an empty path.
/// That sentinel is a valid answer, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    pub cost: f64,
    pub path: Vec<String>,
}

impl ShortestPath {
    /// The "no route exists" sentinel
    pub fn unreachable() -> Self {
        ShortestPath {
            cost: f64::INFINITY,
            path: Vec::new(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.cost.is_finite()
    }
}

/// Breadth-first traversal output
///
/// `levels` and `distances` coincide because the traversal ignores edge
/// weights; unreached vertices keep `f64::INFINITY` and no predecessor.
#[derive(Debug, Clone, Serialize)]
pub struct BfsResult {
    pub levels: BTreeMap<String, f64>,
    pub distances: BTreeMap<String, f64>,
    pub predecessors: BTreeMap<String, Option<String>>,
    /// BFS children of each vertex, in discovery order
    pub tree: BTreeMap<String, Vec<String>>,
    pub visit_order: Vec<String>,
}

/// Depth-first traversal output
#[derive(Debug, Clone, Serialize)]
pub struct DfsResult {
    pub discovery: BTreeMap<String, u32>,
    pub finish: BTreeMap<String, u32>,
    pub predecessors: BTreeMap<String, Option<String>>,
    pub edge_classification: BTreeMap<EdgePair, EdgeClass>,
    pub visit_order: Vec<String>,
    pub has_cycle: bool,
    /// One vertex sequence per depth-first call needed to cover the graph;
    /// the start's component comes first
    pub components: Vec<Vec<String>>,
}

/// Bellman-Ford output when no destination is given
#[derive(Debug, Clone, Serialize)]
pub struct BellmanFordResult {
    pub distances: BTreeMap<String, f64>,
    pub predecessors: BTreeMap<String, String>,
    pub has_negative_cycle: bool,
}

/// Whole-graph metrics record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphMetrics {
    pub order: usize,
    pub size: usize,
    pub density: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_pair_is_order_independent() {
        assert_eq!(EdgePair::new("B", "A"), EdgePair::new("A", "B"));
        assert_eq!(EdgePair::new("A", "B").endpoints(), ("A", "B"));
        assert_eq!(EdgePair::new("B", "A").to_string(), "A -- B");
    }

    #[test]
    fn test_edge_pair_serializes_as_string() {
        let json = serde_json::to_value(EdgePair::new("C", "A")).unwrap();
        assert_eq!(json, serde_json::json!("A -- C"));
    }

    #[test]
    fn test_edge_class_serializes_lowercase() {
        let json = serde_json::to_value(EdgeClass::Back).unwrap();
        assert_eq!(json, serde_json::json!("back"));
    }

    #[test]
    fn test_unreachable_sentinel() {
        let sentinel = ShortestPath::unreachable();
        assert!(!sentinel.is_reachable());
        assert!(sentinel.path.is_empty());
    }

    #[test]
    fn test_attr_value_from_conversions() {
        assert_eq!(AttrValue::from("micro-1"), AttrValue::Str("micro-1".to_string()));
        assert_eq!(AttrValue::from(7), AttrValue::Int(7));
        assert_eq!(AttrValue::from(2.5), AttrValue::Float(2.5));
    }

    #[test]
    fn test_attr_value_untagged_serde() {
        let value: AttrValue = serde_json::from_value(serde_json::json!("north")).unwrap();
        assert_eq!(value, AttrValue::Str("north".to_string()));

        let value: AttrValue = serde_json::from_value(serde_json::json!(3)).unwrap();
        assert_eq!(value, AttrValue::Int(3));
    }
}
