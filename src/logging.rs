//! Diagnostic logging setup.
//!
//! Library code emits `tracing` events; the binary installs a `fmt`
//! subscriber writing to stderr so stdout only ever carries results.
//! `CALCULATOR_LOG` takes standard `EnvFilter` directives and wins over
//! the `-v` count.

use tracing_subscriber::EnvFilter;

use crate::constants::ENV_LOG;
use crate::env::Env;

/// Default filter directive for a given `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Resolve the filter directives, preferring `CALCULATOR_LOG` when it parses.
pub fn directives(verbosity: u8, env: &Env) -> String {
    match env.var(ENV_LOG) {
        Ok(raw) if EnvFilter::try_new(&raw).is_ok() => raw,
        _ => default_directive(verbosity).to_string(),
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are no-ops.
pub fn init(verbosity: u8, env: &Env) {
    let filter = EnvFilter::new(directives(verbosity, env));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
