//! Graph construction configuration
//!
//! Loaders build graphs from tabular rows of `(origin, destination, weight,
//! attrs...)`; `GraphConfig` carries the tunables they need and is stored as
//! TOML next to the data files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::DEFAULT_EDGE_WEIGHT;

/// Tunables for building a graph from tabular data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Build a directed graph instead of an undirected one
    pub directed: bool,
    /// Weight assigned to edges whose source row carries no weight column
    pub default_weight: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            directed: false,
            default_weight: DEFAULT_EDGE_WEIGHT,
        }
    }
}

impl GraphConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: GraphConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::invalid_value("config", e))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject default weights the shortest-path queries would reject later
    pub fn validate(&self) -> Result<()> {
        if !self.default_weight.is_finite() || self.default_weight < 0.0 {
            return Err(GraphError::invalid_value(
                "default_weight",
                self.default_weight,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = GraphConfig::default();
        assert!(!config.directed);
        assert_eq!(config.default_weight, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.toml");

        let config = GraphConfig {
            directed: true,
            default_weight: 2.5,
        };
        config.save(&path).unwrap();

        let loaded = GraphConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: GraphConfig = toml::from_str("directed = true\n").unwrap();
        assert!(config.directed);
        assert_eq!(config.default_weight, 1.0);
    }

    #[test]
    fn test_negative_default_weight_rejected() {
        let config = GraphConfig {
            directed: false,
            default_weight: -1.0,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_rejects_negative_default_weight() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.toml");
        fs::write(&path, "default_weight = -3.0\n").unwrap();

        assert!(GraphConfig::load(&path).is_err());
    }
}
