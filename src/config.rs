//! Configuration file handling for ascii-buddy.
//!
//! Loads configuration from `~/.config/ascii-buddy/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::ascii::{parse_filter, Dimensions, FilterType, PaletteConfig, DEFAULT_COLUMNS, DEFAULT_ROWS};
use crate::feed::{Listing, Period, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, FEED_BASE_URL};

/// Configuration file structure for ascii-buddy.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct FeedConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Listing used when no category flag is given: hot, new or top.
    #[serde(default)]
    pub listing: Option<String>,
    /// Time window for `top` when none is given on the command line.
    #[serde(default)]
    pub period: Option<Period>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            listing: None,
            period: None,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct RenderConfig {
    #[serde(default)]
    pub simple: bool,
    #[serde(default)]
    pub invert: bool,
    /// Resampling filter: nearest, triangle, catmull-rom, gaussian, lanczos3.
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default = "default_columns")]
    pub fallback_columns: u16,
    #[serde(default = "default_rows")]
    pub fallback_rows: u16,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            simple: false,
            invert: false,
            filter: None,
            fallback_columns: default_columns(),
            fallback_rows: default_rows(),
        }
    }
}

fn default_base_url() -> String {
    FEED_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_columns() -> u16 {
    DEFAULT_COLUMNS
}

fn default_rows() -> u16 {
    DEFAULT_ROWS
}

impl Config {
    /// Load configuration from a file path.
    ///
    /// With `None`, the default path is tried and a missing file yields the
    /// default config. An explicitly given path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let explicit = path.is_some();
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if !path.exists() {
            if explicit {
                return Err(ConfigError::NotFound { path });
            }
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            path: path.clone(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?;
        config.validate(&path)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(listing) = &self.feed.listing {
            if !matches!(listing.as_str(), "hot" | "new" | "top") {
                return Err(ConfigError::InvalidValue {
                    path: path.to_path_buf(),
                    message: format!("unknown listing '{}' (expected hot, new or top)", listing),
                });
            }
        }
        if let Some(filter) = &self.render.filter {
            if parse_filter(filter).is_none() {
                return Err(ConfigError::InvalidValue {
                    path: path.to_path_buf(),
                    message: format!("unknown filter '{}'", filter),
                });
            }
        }
        if self.feed.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                path: path.to_path_buf(),
                message: "timeout_secs must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Listing to use when the command line names none.
    pub fn default_listing(&self) -> Listing {
        match self.feed.listing.as_deref() {
            Some("new") => Listing::New,
            Some("top") => Listing::Top(self.feed.period.unwrap_or_default()),
            _ => Listing::Hot,
        }
    }

    pub fn palette(&self) -> PaletteConfig {
        PaletteConfig::new(self.render.simple, self.render.invert)
    }

    pub fn filter(&self) -> FilterType {
        self.render
            .filter
            .as_deref()
            .and_then(parse_filter)
            .unwrap_or(FilterType::Triangle)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.feed.timeout_secs)
    }

    pub fn fallback_dimensions(&self) -> Dimensions {
        Dimensions::new(
            self.render.fallback_columns as u32,
            self.render.fallback_rows as u32,
        )
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    NotFound {
        path: PathBuf,
    },
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    InvalidValue {
        path: PathBuf,
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound { path } => {
                write!(f, "Config file '{}' not found", path.display())
            }
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::InvalidValue { path, message } => {
                write!(f, "Invalid config file '{}': {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("ascii-buddy").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/ascii-buddy/config.toml")
        })
}
