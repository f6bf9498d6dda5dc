use clap::Parser;
use config::{
    Config as ConfigCrate, // Need this for builder
    ConfigError as ConfigCrateError,
    Environment,
    File,
    Map,
    Source,
    Value,
};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::core::mind_map::{
    DEFAULT_CHILD_TITLE, DEFAULT_MAP_TITLE, DEFAULT_ROOT_POSITION, DEFAULT_ROOT_TITLE,
};
use crate::core::{Color, Position};

const DEFAULT_COLOR: Color = Color::Purple;
const DEFAULT_AUTO_SAVE: bool = false;
const DEFAULT_AUTO_SAVE_INTERVAL: u64 = 5; // seconds after the last change
const DEFAULT_ZOOM_STEP: f64 = 0.1;
const MIN_ZOOM_STEP: f64 = 0.1; // zoom snaps to tenths
const DEFAULT_NUDGE_STEP: f64 = 10.0;
const DEFAULT_LOG_LEVEL: &str = "info";

const ENV_PREFIX: &str = "CORTEX";
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigCrateError),
    #[error("Failed to determine config directory")]
    DirectoryNotFound,
    #[error("Validation error: {0}")]
    ValidationError(String),
}

// Optional fields allow for layered config (defaults -> file -> env -> args).
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileConfig {
    default_file: Option<String>,
    map_title: Option<String>,
    root_title: Option<String>,
    root_x: Option<f64>,
    root_y: Option<f64>,
    child_title: Option<String>,
    default_color: Option<Color>,
    auto_save: Option<bool>,
    auto_save_interval: Option<u64>,
    zoom_step: Option<f64>,
    nudge_step: Option<f64>,
    log_level: Option<String>,
    log_dir: Option<String>,
}

/// Resolved configuration; every field has a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub default_file: Option<PathBuf>,
    pub map_title: String,
    pub root_title: String,
    pub root_position: Position,
    pub child_title: String,
    /// Color preselected for new children.
    pub default_color: Color,
    pub auto_save: bool,
    pub auto_save_interval: u64,
    pub zoom_step: f64,
    pub nudge_step: f64,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            default_file: None,
            map_title: DEFAULT_MAP_TITLE.to_string(),
            root_title: DEFAULT_ROOT_TITLE.to_string(),
            root_position: DEFAULT_ROOT_POSITION,
            child_title: DEFAULT_CHILD_TITLE.to_string(),
            default_color: DEFAULT_COLOR,
            auto_save: DEFAULT_AUTO_SAVE,
            auto_save_interval: DEFAULT_AUTO_SAVE_INTERVAL,
            zoom_step: DEFAULT_ZOOM_STEP,
            nudge_step: DEFAULT_NUDGE_STEP,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: None,
        }
    }
}

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Mind-map canvas for the terminal", long_about = None)]
pub struct CliArgs {
    /// Mind map snapshot (JSON) to open; created on first save if missing
    pub filename: Option<PathBuf>,

    /// Path to a custom configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the visible outline and exit
    #[arg(long)]
    pub outline: bool,

    /// Write the snapshot to mindmap-<title>.json and exit
    #[arg(long)]
    pub export: bool,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub debug_config: bool,

    #[arg(long)]
    pub map_title: Option<String>,
    #[arg(long)]
    pub root_title: Option<String>,
    #[arg(long)]
    pub child_title: Option<String>,
    #[arg(long)]
    pub default_color: Option<Color>,
    #[arg(long)]
    pub auto_save: Option<bool>,
    #[arg(long)]
    pub auto_save_interval: Option<u64>,
    #[arg(long)]
    pub zoom_step: Option<f64>,
    #[arg(long)]
    pub nudge_step: Option<f64>,
    #[arg(long)]
    pub log_level: Option<String>,
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "cortex-map")
}

fn default_config_path() -> Result<PathBuf, ConfigError> {
    project_dirs()
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .ok_or(ConfigError::DirectoryNotFound)
}

/// Loads configuration from the config file, `CORTEX_*` environment
/// variables and the command line, in increasing priority.
pub fn load_config(args: &CliArgs) -> Result<AppConfig, ConfigError> {
    let env_source = Environment::with_prefix(ENV_PREFIX).prefix_separator("_");
    // Missing env vars are fine; a failed collect just means no overrides.
    let env_map: Map<String, Value> = env_source.collect().unwrap_or_else(|_| Map::new());

    build_config_from_args(args, Some(env_map))
}

// Separate function to allow testing with specific args and override sources
fn build_config_from_args(
    args: &CliArgs,
    override_source: Option<Map<String, Value>>,
) -> Result<AppConfig, ConfigError> {
    let config_file_path = match &args.config {
        Some(path) => Some(path.clone()),
        None => default_config_path().ok(),
    };

    let mut config_builder = ConfigCrate::builder();

    if let Some(ref path) = config_file_path {
        config_builder = config_builder.add_source(File::from(path.clone()).required(false));
    }

    // Overrides (environment or a test map) beat the file.
    if let Some(overrides) = override_source {
        for (key, value) in overrides {
            config_builder = config_builder.set_override(&key, value)?;
        }
    }

    let loaded: FileConfig = config_builder.build()?.try_deserialize()?;
    let defaults = AppConfig::default();

    // Args are checked first, then overrides/file, then defaults.
    let config = AppConfig {
        default_file: args
            .filename
            .clone()
            .or_else(|| loaded.default_file.map(PathBuf::from)),
        map_title: args
            .map_title
            .clone()
            .or(loaded.map_title)
            .unwrap_or(defaults.map_title),
        root_title: args
            .root_title
            .clone()
            .or(loaded.root_title)
            .unwrap_or(defaults.root_title),
        root_position: Position::new(
            loaded.root_x.unwrap_or(defaults.root_position.x),
            loaded.root_y.unwrap_or(defaults.root_position.y),
        ),
        child_title: args
            .child_title
            .clone()
            .or(loaded.child_title)
            .unwrap_or(defaults.child_title),
        default_color: args
            .default_color
            .or(loaded.default_color)
            .unwrap_or(defaults.default_color),
        auto_save: args
            .auto_save
            .or(loaded.auto_save)
            .unwrap_or(defaults.auto_save),
        auto_save_interval: args
            .auto_save_interval
            .or(loaded.auto_save_interval)
            .unwrap_or(defaults.auto_save_interval),
        zoom_step: args
            .zoom_step
            .or(loaded.zoom_step)
            .unwrap_or(defaults.zoom_step),
        nudge_step: args
            .nudge_step
            .or(loaded.nudge_step)
            .unwrap_or(defaults.nudge_step),
        log_level: args
            .log_level
            .clone()
            .or(loaded.log_level)
            .unwrap_or(defaults.log_level)
            .to_ascii_lowercase(),
        log_dir: args
            .log_dir
            .clone()
            .or_else(|| loaded.log_dir.map(PathBuf::from)),
    };

    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if !(config.zoom_step.is_finite() && config.zoom_step >= MIN_ZOOM_STEP) {
        return Err(ConfigError::ValidationError(format!(
            "zoom_step must be at least {}, got {}",
            MIN_ZOOM_STEP, config.zoom_step
        )));
    }
    if !(config.nudge_step.is_finite() && config.nudge_step > 0.0) {
        return Err(ConfigError::ValidationError(format!(
            "nudge_step must be positive, got {}",
            config.nudge_step
        )));
    }
    if !(config.root_position.x.is_finite() && config.root_position.y.is_finite()) {
        return Err(ConfigError::ValidationError(
            "root_x and root_y must be finite".to_string(),
        ));
    }
    if !LOG_LEVELS.contains(&config.log_level.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "unknown log_level '{}' (expected one of {})",
            config.log_level,
            LOG_LEVELS.join(", ")
        )));
    }
    if config.root_title.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "root_title must not be empty".to_string(),
        ));
    }
    Ok(())
}
