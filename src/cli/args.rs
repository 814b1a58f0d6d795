//! Clap argument types.

use clap::Parser;
use std::path::PathBuf;

use calculator::models::Operand;
use calculator::output::OutputFormat;

/// Range-checked four-function calculator.
#[derive(Parser, Debug)]
#[command(
    name = "calculator",
    version = calculator::constants::VERSION,
    about = "Add, subtract, multiply and divide two numbers within [-1000000, 1000000]",
)]
pub struct Cli {
    /// Output format (overrides config and CALCULATOR_FORMAT).
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Config file to use instead of ./.calculator.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Add two numbers.
    Add(OperandArgs),

    /// Subtract B from A.
    #[command(alias = "sub")]
    Subtract(OperandArgs),

    /// Multiply two numbers.
    #[command(alias = "mul")]
    Multiply(OperandArgs),

    /// Divide A by B.
    #[command(alias = "div")]
    Divide(OperandArgs),

    /// Print the effective configuration as TOML.
    Config,

    /// Print version and build information.
    Version,
}

/// The two operands of an arithmetic command.
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct OperandArgs {
    /// First operand.
    #[arg(allow_negative_numbers = true)]
    pub a: Operand,

    /// Second operand.
    #[arg(allow_negative_numbers = true)]
    pub b: Operand,
}
