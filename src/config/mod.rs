//! YAML configuration with CLI overrides.
//!
//! Every key in the file is optional. Resolution order is: command-line flag,
//! then config file, then built-in default.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::DEFAULT_ENDPOINT;
use crate::state::SelectionMode;

/// Rows per page when nothing else is configured
pub const DEFAULT_ROWS_PER_PAGE: u32 = 5;
/// Largest `limit` the listing endpoint accepts
pub const MAX_ROWS_PER_PAGE: u32 = 100;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Contents of `config.yml`
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ConfigFile {
    pub endpoint: Option<String>,
    pub rows_per_page: Option<u32>,
    pub selection_mode: Option<SelectionMode>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

/// Values given on the command line
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub endpoint: Option<String>,
    pub rows_per_page: Option<u32>,
    pub selection_mode: Option<SelectionMode>,
    pub timeout_secs: Option<u64>,
}

/// Effective settings after merging file, flags and defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub endpoint: String,
    pub rows_per_page: u32,
    pub selection_mode: SelectionMode,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Settings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            selection_mode: SelectionMode::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("artwork-browser/{}", env!("CARGO_PKG_VERSION"))
}

/// `<config dir>/artwork-browser/config.yml`
pub fn default_config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("artwork-browser").join("config.yml"))
}

/// Read and parse a config file. A missing file yields an empty config when
/// `allow_missing` is set.
pub fn load_config(path: &Path, allow_missing: bool) -> Result<ConfigFile> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            debug!(path = %path.display(), "loading config");
            // An all-comments file parses as null
            let parsed: Option<ConfigFile> = serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse config: {}", path.display()))?;
            Ok(parsed.unwrap_or_default())
        }
        Err(e) if e.kind() == ErrorKind::NotFound && allow_missing => Ok(ConfigFile::default()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            bail!("Config file not found: {}", path.display())
        }
        Err(e) => {
            Err(e).with_context(|| format!("Failed to read config: {}", path.display()))
        }
    }
}

/// Merge flags over the file over defaults, and validate the result
pub fn resolve(file: ConfigFile, overrides: Overrides) -> Result<Settings> {
    let defaults = Settings::default();

    let settings = Settings {
        endpoint: overrides.endpoint.or(file.endpoint).unwrap_or(defaults.endpoint),
        rows_per_page: overrides
            .rows_per_page
            .or(file.rows_per_page)
            .unwrap_or(defaults.rows_per_page),
        selection_mode: overrides
            .selection_mode
            .or(file.selection_mode)
            .unwrap_or(defaults.selection_mode),
        timeout_secs: overrides.timeout_secs.or(file.timeout_secs).unwrap_or(defaults.timeout_secs),
        user_agent: file.user_agent.unwrap_or(defaults.user_agent),
    };

    if settings.endpoint.trim().is_empty() {
        bail!("Endpoint must not be empty");
    }
    if settings.rows_per_page == 0 || settings.rows_per_page > MAX_ROWS_PER_PAGE {
        bail!(
            "rows_per_page must be between 1 and {} (got {})",
            MAX_ROWS_PER_PAGE,
            settings.rows_per_page
        );
    }
    if settings.timeout_secs == 0 {
        bail!("timeout_secs must be greater than 0");
    }

    Ok(settings)
}

pub fn default_config_yaml() -> &'static str {
    r#"# artwork-browser config
#
# Location (default):
#   <config dir>/artwork-browser/config.yml
# Every key is optional; command-line flags take precedence.

# Listing endpoint of the catalog API
endpoint: https://api.artic.edu/api/v1/artworks

# Rows per page (1-100), fixed for the session
rows_per_page: 5

# How unchecking a row is handled:
#   reconcile - the visible page's checkboxes are the truth for that page
#   additive  - rows are only ever added to the selection
selection_mode: reconcile

# HTTP request timeout in seconds
timeout_secs: 10

# user_agent: artwork-browser (you@example.com)
"#
}

/// Write the commented default config if `path` does not exist yet.
/// Returns whether a file was created.
pub fn ensure_default_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    let parent = path
        .parent()
        .with_context(|| format!("Invalid config path: {}", path.display()))?;
    std::fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    std::fs::write(path, default_config_yaml())
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    Ok(true)
}
