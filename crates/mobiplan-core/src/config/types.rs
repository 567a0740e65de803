//! Configuration type definitions

use crate::graph::{Edge, Node};
use crate::modes::{ScoringWeights, TransportMode};
use serde::{Deserialize, Serialize};

/// Current config format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Planner configuration.
///
/// Empty `nodes`/`edges` select the built-in city; empty `modes` selects the
/// built-in catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Ranking score weights
    #[serde(default)]
    pub scoring: ScoringWeights,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<Node>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<Edge>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modes: Vec<TransportMode>,
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            scoring: ScoringWeights::default(),
            nodes: Vec::new(),
            edges: Vec::new(),
            modes: Vec::new(),
        }
    }
}
