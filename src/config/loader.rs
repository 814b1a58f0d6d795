//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `--config <PATH>`, or `.calculator.toml` in the working directory
//! 4. `~/.config/calculator/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculator::CalcError;
use crate::constants::{DEFAULT_MAX, DEFAULT_MIN, ENV_FORMAT, ENV_MAX, ENV_MIN};
use crate::env::{Env, EnvValue};
use crate::models::Limits;
use crate::output::OutputFormat;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid [limits] configuration: {0}")]
    Limits(#[from] CalcError),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub limits: LimitsConfig,
}

/// Output-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Operand range configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub min: f64,
    pub max: f64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

/// One config file as written. Keys the file omits stay `None`, so a
/// higher layer can also set a value back to its built-in default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub output: OutputLayer,
    pub limits: LimitsLayer,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputLayer {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LimitsLayer {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl LimitsConfig {
    /// Validate the configured bounds.
    pub fn to_limits(&self) -> Result<Limits, CalcError> {
        Limits::new(self.min, self.max)
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads the global config, then either `explicit` (which must exist)
    /// or `.calculator.toml` under `working_dir` (if present), then applies
    /// environment variable overrides.
    pub fn load(
        explicit: Option<&Path>,
        working_dir: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let global = Self::global_config_path();
        Self::load_layers(global.as_deref(), explicit, working_dir, env)
    }

    fn load_layers(
        global: Option<&Path>,
        explicit: Option<&Path>,
        working_dir: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = global {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global config");
                let global = Self::load_file(global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: explicit or working-directory config
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            let local = Self::load_file(path)?;
            config.merge(local);
        } else if let Some(dir) = working_dir {
            let local_path = dir.join(crate::constants::CONFIG_FILENAME);
            if local_path.exists() {
                debug!(path = %local_path.display(), "loading local config");
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        config.limits.to_limits()?;
        Ok(config)
    }

    /// Read one config file as a layer.
    pub fn load_file(path: &Path) -> Result<ConfigLayer, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::constants::CONFIG_DIR).join("config.toml"))
    }

    /// Apply a layer on top of this config. Every key the layer sets wins.
    fn merge(&mut self, layer: ConfigLayer) {
        if let Some(format) = layer.output.format {
            self.output.format = format;
        }
        if let Some(min) = layer.limits.min {
            self.limits.min = min;
        }
        if let Some(max) = layer.limits.max {
            self.limits.max = max;
        }
    }

    /// Apply environment variable overrides. Unparseable values are ignored.
    fn apply_env_vars(&mut self, env: &Env) {
        match env.parsed::<OutputFormat>(ENV_FORMAT) {
            EnvValue::Parsed(format) => self.output.format = format,
            EnvValue::Invalid(val) => warn!("ignoring invalid {ENV_FORMAT} value: {val}"),
            EnvValue::Unset => {}
        }

        match env.parsed::<f64>(ENV_MIN) {
            EnvValue::Parsed(min) => self.limits.min = min,
            EnvValue::Invalid(val) => warn!("ignoring invalid {ENV_MIN} value: {val}"),
            EnvValue::Unset => {}
        }

        match env.parsed::<f64>(ENV_MAX) {
            EnvValue::Parsed(max) => self.limits.max = max,
            EnvValue::Invalid(val) => warn!("ignoring invalid {ENV_MAX} value: {val}"),
            EnvValue::Unset => {}
        }
    }
}
