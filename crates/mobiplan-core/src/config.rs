//! Planner configuration for mobiplan
//!
//! Configuration is read from a TOML file (`config.toml`). Every section is
//! optional; anything omitted falls back to the built-in city and catalog.

pub mod location;
pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{default_city, default_modes};
use crate::error::{MobiplanError, Result};
use crate::graph::Graph;
use crate::modes::{validate_catalog, TransportMode};

pub use location::{default_config_path, resolve_source, ConfigSource};
pub use types::{PlannerConfig, CONFIG_FORMAT_VERSION};

impl PlannerConfig {
    /// Configuration with the built-in city and catalog written out in full
    pub fn builtin() -> Self {
        let city = default_city();
        Self {
            nodes: city.nodes().to_vec(),
            edges: city.edges().to_vec(),
            modes: default_modes(),
            ..Default::default()
        }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| MobiplanError::io_operation("read config", path.display(), e))?;
        let config: PlannerConfig = toml::from_str(&content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            tracing::warn!(
                version = config.version,
                supported = CONFIG_FORMAT_VERSION,
                "config was written by a newer mobiplan"
            );
        }

        config.validate()?;
        Ok(config)
    }

    /// Resolve and load the effective configuration.
    ///
    /// An explicit path must exist. The default location is optional; when
    /// absent the built-in defaults are used. Returns the file actually read.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        let source = resolve_source(explicit)?;
        match source {
            ConfigSource::Explicit(path) => {
                let config = Self::load(&path)?;
                Ok((config, Some(path)))
            }
            ConfigSource::Discovered(path) if path.exists() => {
                let config = Self::load(&path)?;
                Ok((config, Some(path)))
            }
            ConfigSource::Discovered(path) => {
                tracing::debug!(path = %path.display(), "no config file, using built-in defaults");
                Ok((Self::default(), None))
            }
        }
    }

    /// Save configuration to a file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                MobiplanError::io_operation("create config directory", parent.display(), e)
            })?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .map_err(|e| MobiplanError::io_operation("write config", path.display(), e))?;
        Ok(())
    }

    /// Check scoring weights, graph invariants and the mode catalog
    pub fn validate(&self) -> Result<()> {
        self.scoring.validate()?;
        self.build_graph()?;
        self.build_modes()?;
        Ok(())
    }

    /// Graph described by this config, or the built-in city
    pub fn build_graph(&self) -> Result<Graph> {
        if self.nodes.is_empty() {
            if !self.edges.is_empty() {
                return Err(MobiplanError::invalid_graph(
                    "edges are configured but nodes are not",
                ));
            }
            return Ok(default_city());
        }
        Graph::new(self.nodes.clone(), self.edges.clone())
    }

    /// Mode catalog described by this config, or the built-in catalog
    pub fn build_modes(&self) -> Result<Vec<TransportMode>> {
        if self.modes.is_empty() {
            return Ok(default_modes());
        }
        validate_catalog(&self.modes)?;
        Ok(self.modes.clone())
    }
}
