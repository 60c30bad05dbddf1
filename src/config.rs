//! Configuration loading.
//!
//! Override order: defaults → config file → environment → command line.
//! The file lives at `$CONFIG_DIR/nexai/config.toml` and every key is optional.
//! Slide count, animation length and catalogue page size are fixed and not configurable.

use crate::error::{NexaiError, Result};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Canonical base URL used for derived output.
pub const DEFAULT_SITE_URL: &str = "https://nexai.directory";
/// Environment variable overriding the base URL.
pub const SITE_URL_ENV: &str = "NEXAI_SITE_URL";
/// Wheel delta credited per terminal scroll notch (a browser's line-mode delta).
pub const DEFAULT_WHEEL_TICK_DELTA: f64 = 100.0;
/// Window in which scroll notches are summed into one wheel event.
pub const DEFAULT_WHEEL_COALESCE_MS: u64 = 30;

/// Named colour themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    #[default]
    Glitch,
    Monochrome,
    HighContrast,
}

impl FromStr for ThemeName {
    type Err = NexaiError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "glitch" => Ok(ThemeName::Glitch),
            "monochrome" => Ok(ThemeName::Monochrome),
            "high-contrast" => Ok(ThemeName::HighContrast),
            other => Err(NexaiError::config(format!(
                "unknown theme `{}` (expected glitch, monochrome or high-contrast)",
                other
            ))),
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ThemeName::Glitch => "glitch",
            ThemeName::Monochrome => "monochrome",
            ThemeName::HighContrast => "high-contrast",
        })
    }
}

/// Sparse file representation; absent keys fall back to defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub theme: Option<ThemeName>,
    pub site_url: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub wheel_tick_delta: Option<f64>,
    pub wheel_coalesce_ms: Option<u64>,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub theme: ThemeName,
    pub site_url: String,
    /// Directory replacing the bundled records, if any
    pub data_dir: Option<PathBuf>,
    pub wheel_tick_delta: f64,
    pub wheel_coalesce_window: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeName::default(),
            site_url: DEFAULT_SITE_URL.to_string(),
            data_dir: None,
            wheel_tick_delta: DEFAULT_WHEEL_TICK_DELTA,
            wheel_coalesce_window: Duration::from_millis(DEFAULT_WHEEL_COALESCE_MS),
        }
    }
}

/// Command-line overrides, applied last.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub theme: Option<ThemeName>,
    pub data_dir: Option<PathBuf>,
}

/// Default location of the config file, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("nexai").join("config.toml"))
}

impl Config {
    /// Resolve settings from an optional explicit path, the environment and CLI flags.
    ///
    /// A missing file at the default location yields defaults; a missing file at an
    /// explicit path is an error, as is a malformed file anywhere.
    pub fn load(explicit_path: Option<&Path>, overrides: &CliOverrides) -> Result<Self> {
        let file = match explicit_path {
            Some(path) => Some(read_config_file(path)?),
            None => match default_config_path() {
                Some(path) if path.exists() => Some(read_config_file(&path)?),
                Some(path) => {
                    log::debug!("No config file at {}, using defaults", path.display());
                    None
                }
                None => {
                    log::warn!("Could not determine config directory, using defaults");
                    None
                }
            },
        };

        let env_site_url = std::env::var(SITE_URL_ENV).ok();
        Self::resolve(file.unwrap_or_default(), env_site_url, overrides)
    }

    /// Merge a parsed file, the environment value for the base URL and CLI flags
    pub fn resolve(
        file: ConfigFile,
        env_site_url: Option<String>,
        overrides: &CliOverrides,
    ) -> Result<Self> {
        let defaults = Config::default();

        let site_url = env_site_url
            .filter(|url| !url.trim().is_empty())
            .or(file.site_url)
            .unwrap_or(defaults.site_url);
        url::Url::parse(&site_url)
            .map_err(|e| NexaiError::config(format!("site_url `{}` is invalid: {}", site_url, e)))?;

        let wheel_tick_delta = file.wheel_tick_delta.unwrap_or(defaults.wheel_tick_delta);
        if !(wheel_tick_delta.is_finite() && wheel_tick_delta > 0.0) {
            return Err(NexaiError::config(format!(
                "wheel_tick_delta must be a positive number (got {})",
                wheel_tick_delta
            )));
        }

        Ok(Self {
            theme: overrides.theme.or(file.theme).unwrap_or(defaults.theme),
            site_url: site_url.trim_end_matches('/').to_string(),
            data_dir: overrides.data_dir.clone().or(file.data_dir),
            wheel_tick_delta,
            wheel_coalesce_window: file
                .wheel_coalesce_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.wheel_coalesce_window),
        })
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        NexaiError::file_error(format!("Cannot read config {}", path.display()), e)
    })?;
    let file: ConfigFile = toml::from_str(&contents).map_err(|e| {
        NexaiError::config(format!("{}: {}", path.display(), e.message()))
    })?;
    log::info!("Loaded config from {}", path.display());
    Ok(file)
}
