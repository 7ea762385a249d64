//! Error types for wayfind
//!
//! Query errors cover ill-posed queries only. "No path exists" is never an
//! error: shortest-path queries report it through the infinite-cost sentinel
//! in `ShortestPath`, so callers can tell a malformed query from a
//! well-formed one with no route. Incremental construction failures
//! (duplicate vertex, missing endpoint) are reported as booleans by the
//! mutation API, not through this type.

use thiserror::Error;

/// Errors that can occur during graph queries and configuration loading
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("negative weight {weight} on edge {from} -> {to}")]
    NegativeWeightRejected {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("negative cycle reachable from {start}")]
    NegativeCycleDetected { start: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },
}

impl GraphError {
    /// Create an error for a vertex name not present in the graph
    pub fn unknown_vertex(name: impl Into<String>) -> Self {
        GraphError::UnknownVertex(name.into())
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownVertex(_) => "unknown_vertex",
            GraphError::NegativeWeightRejected { .. } => "negative_weight_rejected",
            GraphError::NegativeCycleDetected { .. } => "negative_cycle_detected",
            GraphError::Io(_) => "io_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::InvalidValue { .. } => "invalid_value",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for wayfind operations
pub type Result<T> = std::result::Result<T, GraphError>;
