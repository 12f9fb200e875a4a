//! Configuration file loading and effective-settings resolution.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::bundle::DEFAULT_TOOL;
use crate::cli::Cli;

/// Default `.icns` output path, relative to the working directory.
const DEFAULT_OUTPUT: &str = "AppIcon.icns";

/// Default staging directory name.
const DEFAULT_ICONSET_DIR: &str = "AppIcon.iconset";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default values for paths and the icon compiler.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Default values from the config file. Any field may be omitted.
#[derive(Debug, Default, Deserialize)]
pub struct DefaultsConfig {
    /// Output path for the `.icns` bundle.
    pub output: Option<String>,
    /// Staging directory for the iconset.
    pub iconset_dir: Option<String>,
    /// Icon compiler executable.
    pub tool: Option<String>,
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }
}

/// Effective settings after merging CLI flags over config values.
#[derive(Debug)]
pub struct Settings {
    /// Output path for the `.icns` bundle.
    pub output: PathBuf,
    /// Staging directory for the iconset.
    pub iconset_dir: PathBuf,
    /// Icon compiler executable.
    pub tool: String,
    /// Whether to keep the staging directory after bundling.
    pub keep_iconset: bool,
}

impl Settings {
    /// Merge CLI flags over config-file defaults over built-in defaults.
    #[must_use]
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        let pick = |flag: &Option<String>, file: &Option<String>, builtin: &str| {
            flag.clone().or_else(|| file.clone()).unwrap_or_else(|| builtin.to_string())
        };
        Self {
            output: pick(&cli.output, &config.defaults.output, DEFAULT_OUTPUT).into(),
            iconset_dir: pick(&cli.iconset_dir, &config.defaults.iconset_dir, DEFAULT_ICONSET_DIR)
                .into(),
            tool: pick(&cli.tool, &config.defaults.tool, DEFAULT_TOOL),
            keep_iconset: cli.keep_iconset,
        }
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `HEARTGEN_CONFIG` environment variable
/// 3. `~/.config/heartgen/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("HEARTGEN_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/heartgen/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/heartgen/config.toml")
    } else {
        PathBuf::from("heartgen.toml")
    }
}
