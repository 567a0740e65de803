//! Config file discovery (~/.config/mobiplan/config.toml by default)

use std::path::{Path, PathBuf};

use crate::error::{MobiplanError, Result};

pub const CONFIG_DIR: &str = "mobiplan";
pub const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "MOBIPLAN_CONFIG_DIR";

/// Where the effective configuration comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config PATH`; the file must exist
    Explicit(PathBuf),
    /// Default location; used only if the file exists
    Discovered(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Discovered(path) => path,
        }
    }
}

/// Default config path: `$MOBIPLAN_CONFIG_DIR/config.toml`, else the
/// platform config dir
pub fn default_config_path() -> Result<PathBuf> {
    let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
        PathBuf::from(env_dir)
    } else {
        dirs::config_dir()
            .ok_or_else(|| MobiplanError::Other("unable to determine config directory".to_string()))?
            .join(CONFIG_DIR)
    };

    Ok(config_dir.join(CONFIG_FILE))
}

/// Resolve the config source from an optional explicit path
pub fn resolve_source(explicit: Option<&Path>) -> Result<ConfigSource> {
    match explicit {
        Some(path) => Ok(ConfigSource::Explicit(path.to_path_buf())),
        None => default_config_path().map(ConfigSource::Discovered),
    }
}
