//! Environment variable abstraction for testability.
//!
//! Production code uses [`Env::real()`] which delegates to [`std::env::var`].
//! Tests use [`Env::mock()`] backed by a `HashMap`, so config and logging
//! overrides can be exercised without touching the process environment.

use std::collections::HashMap;
use std::env::VarError;
use std::str::FromStr;

/// Outcome of reading and parsing a typed environment variable.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvValue<T> {
    /// Variable not set.
    Unset,
    /// Set and parsed successfully.
    Parsed(T),
    /// Set but not parseable; carries the raw value for the warning.
    Invalid(String),
}

/// Environment variable reader.
#[derive(Clone, Debug, Default)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Create an `Env` that reads from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Create an `Env` backed by explicit key-value pairs.
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Look up an environment variable by name.
    pub fn var(&self, name: &str) -> Result<String, VarError> {
        match &self.overrides {
            Some(map) => map.get(name).cloned().ok_or(VarError::NotPresent),
            None => std::env::var(name),
        }
    }

    /// Look up a variable and parse it as `T`, trimming surrounding whitespace.
    pub fn parsed<T: FromStr>(&self, name: &str) -> EnvValue<T> {
        classify(self.var(name))
    }
}

fn classify<T: FromStr>(lookup: Result<String, VarError>) -> EnvValue<T> {
    match lookup {
        Ok(raw) => match raw.trim().parse::<T>() {
            Ok(value) => EnvValue::Parsed(value),
            Err(_) => EnvValue::Invalid(raw),
        },
        // Set but not UTF-8: report it rather than treating it as unset.
        Err(VarError::NotUnicode(raw)) => EnvValue::Invalid(raw.to_string_lossy().into_owned()),
        Err(VarError::NotPresent) => EnvValue::Unset,
    }
}
