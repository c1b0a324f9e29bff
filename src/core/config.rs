//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tickoff/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TickoffConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub data_dir: Option<PathBuf>,
    pub save_debounce_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SAVE_DEBOUNCE_MS: u64 = 50;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_FILE_NAME: &str = "tickoff.log";
const APP_DIR_NAME: &str = ".tickoff";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub data_dir: PathBuf,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub save_debounce: Duration,
}

/// Settings given on the command line (None = not specified).
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub data_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Settings read from the environment (None = not set).
#[derive(Debug, Default)]
pub struct EnvOverrides {
    pub data_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var_os("TICKOFF_DATA_DIR").map(PathBuf::from),
            log_level: std::env::var("TICKOFF_LOG_LEVEL").ok(),
        }
    }
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

/// Returns `~/.tickoff/`, or `./.tickoff/` if there is no home directory.
pub fn app_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(APP_DIR_NAME))
}

/// Returns the path to `~/.tickoff/config.toml`.
pub fn config_path() -> PathBuf {
    app_dir().join("config.toml")
}

/// Load config from `~/.tickoff/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TickoffConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TickoffConfig, ConfigError> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<TickoffConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(TickoffConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: TickoffConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# tickoff configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# data_dir = "/home/me/.tickoff"     # Or set TICKOFF_DATA_DIR
# save_debounce_ms = 50              # Quiet period before a save is written

# [logging]
# level = "info"                     # "off", "error", "warn", "info", "debug", "trace"
# file = "/home/me/.tickoff/tickoff.log"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TickoffConfig, env: &EnvOverrides, cli: &CliOverrides) -> ResolvedConfig {
    // Data dir: CLI → env → config → default
    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| env.data_dir.clone())
        .or_else(|| config.general.data_dir.clone())
        .unwrap_or_else(app_dir);

    // Log level: CLI → env → config → default, unparseable values skipped
    let log_level = [
        cli.log_level.as_deref(),
        env.log_level.as_deref(),
        config.logging.level.as_deref(),
    ]
    .into_iter()
    .flatten()
    .find_map(parse_level)
    .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = config
        .logging
        .file
        .clone()
        .unwrap_or_else(|| data_dir.join(DEFAULT_LOG_FILE_NAME));

    let save_debounce = Duration::from_millis(
        config
            .general
            .save_debounce_ms
            .unwrap_or(DEFAULT_SAVE_DEBOUNCE_MS),
    );

    ResolvedConfig {
        data_dir,
        log_file,
        log_level,
        save_debounce,
    }
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.parse() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Unknown log level '{}', ignoring", value);
            None
        }
    }
}
