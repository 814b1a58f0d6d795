//! calculator — range-checked four-function calculator (library crate).
//!
//! Re-exports public modules for the CLI binary, integration tests and
//! external use.

pub mod calculator;
pub mod config;
pub mod constants;
pub mod env;
pub mod logging;
pub mod models;
pub mod output;

pub use calculator::{CalcError, Calculator};
pub use models::{Evaluation, Limits, Operand, Operation};
