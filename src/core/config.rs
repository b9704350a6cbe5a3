//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.sukoon/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::endpoint::http::{DEFAULT_CHAT_PATH, DEFAULT_HEALTH_PATH};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SukoonConfig {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub widget: WidgetConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EndpointConfig {
    pub base_url: Option<String>,
    pub chat_path: Option<String>,
    pub health_path: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WidgetConfig {
    pub title: Option<String>,
    pub assistant_name: Option<String>,
    /// Empty string disables the greeting.
    pub greeting: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_TITLE: &str = "Sukoon AI";
pub const DEFAULT_ASSISTANT_NAME: &str = "sukoon";
pub const DEFAULT_GREETING: &str = "Hello, I'm **Sukoon AI**, your calm and caring companion. \
    How are you feeling today?";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub chat_path: String,
    pub health_path: String,
    pub timeout_secs: u64,
    pub title: String,
    pub assistant_name: String,
    pub greeting: Option<String>,
}

/// Values supplied on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub no_greeting: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.sukoon/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".sukoon").join("config.toml"))
}

/// Load config from `~/.sukoon/config.toml`.
pub fn load_config() -> Result<SukoonConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(SukoonConfig::default())
        }
    }
}

/// Load config from an explicit path.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SukoonConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<SukoonConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(SukoonConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SukoonConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Sukoon Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [endpoint]
# base_url = "http://localhost:8000"   # Or set SUKOON_ENDPOINT_URL
# chat_path = "/api/chat"
# health_path = "/health"
# timeout_secs = 60                    # Or set SUKOON_TIMEOUT_SECS

# [widget]
# title = "Sukoon AI"
# assistant_name = "sukoon"
# greeting = ""                        # Empty disables the greeting
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &SukoonConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env<F>(config: &SukoonConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env("SUKOON_ENDPOINT_URL"))
        .or_else(|| config.endpoint.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Timeout: CLI → env → config → default
    let timeout_secs = cli
        .timeout_secs
        .or_else(|| {
            env("SUKOON_TIMEOUT_SECS").and_then(|v| match v.trim().parse::<u64>() {
                Ok(secs) => Some(secs),
                Err(e) => {
                    warn!("Ignoring invalid SUKOON_TIMEOUT_SECS '{}': {}", v, e);
                    None
                }
            })
        })
        .or(config.endpoint.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    // Greeting: --no-greeting or an empty string disables it
    let greeting = if cli.no_greeting {
        None
    } else {
        match config.widget.greeting.as_deref() {
            Some(text) if text.trim().is_empty() => None,
            Some(text) => Some(text.to_string()),
            None => Some(DEFAULT_GREETING.to_string()),
        }
    };

    ResolvedConfig {
        base_url,
        chat_path: config
            .endpoint
            .chat_path
            .clone()
            .unwrap_or_else(|| DEFAULT_CHAT_PATH.to_string()),
        health_path: config
            .endpoint
            .health_path
            .clone()
            .unwrap_or_else(|| DEFAULT_HEALTH_PATH.to_string()),
        timeout_secs,
        title: config
            .widget
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        assistant_name: config
            .widget
            .assistant_name
            .clone()
            .unwrap_or_else(|| DEFAULT_ASSISTANT_NAME.to_string()),
        greeting,
    }
}
