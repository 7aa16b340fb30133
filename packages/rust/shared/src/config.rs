//! Application configuration for bpdocs.
//!
//! User config lives at `~/.bpdocs/bpdocs.toml` and is optional.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BpDocsError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "bpdocs.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".bpdocs";

/// Simulator host queried when nothing else is configured.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Simulator port queried when nothing else is configured.
pub const DEFAULT_PORT: u16 = 2000;

/// Bound on the catalog request, connection included.
pub const DEFAULT_TIMEOUT_MS: u64 = 2000;

/// Blueprint filter matching the whole catalog.
pub const DEFAULT_FILTER: &str = "*";

/// Where the rendered document lands, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "Docs/bp_library.md";

// ---------------------------------------------------------------------------
// Config structs (matching bpdocs.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Simulator connection settings.
    #[serde(default)]
    pub simulator: SimulatorConfig,

    /// Output document settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[simulator]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Wildcard filter passed to the catalog query.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timeout_ms: default_timeout_ms(),
            filter: default_filter(),
        }
    }
}

fn default_host() -> String {
    DEFAULT_HOST.into()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}
fn default_filter() -> String {
    DEFAULT_FILTER.into()
}

/// `[output]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the generated Markdown file.
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.bpdocs/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| BpDocsError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.bpdocs/bpdocs.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist
/// or the home directory cannot be determined.
pub fn load_config() -> Result<AppConfig> {
    let path = match config_file_path() {
        Ok(path) => path,
        Err(e) => {
            tracing::debug!(error = %e, "no home directory, using defaults");
            return Ok(AppConfig::default());
        }
    };

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| BpDocsError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| BpDocsError::config(format!("failed to parse {}: {e}", path.display())))
}
