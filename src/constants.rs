//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and build metadata so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "calculator";

/// Crate version, as reported by `calculator version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compilation target triple (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.calculator.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".calculator.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "calculator";

/// Default lower bound (inclusive) for every operand.
pub const DEFAULT_MIN: f64 = -1_000_000.0;

/// Default upper bound (inclusive) for every operand.
pub const DEFAULT_MAX: f64 = 1_000_000.0;

// ── Environment variable names ──────────────────────────────────────

pub const ENV_FORMAT: &str = "CALCULATOR_FORMAT";
pub const ENV_MIN: &str = "CALCULATOR_MIN";
pub const ENV_MAX: &str = "CALCULATOR_MAX";
pub const ENV_LOG: &str = "CALCULATOR_LOG";
