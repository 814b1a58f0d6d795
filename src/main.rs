//! calculator — range-checked four-function calculator CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use calculator::config;
use calculator::constants;
use calculator::env;
use calculator::logging;
use calculator::models;
use calculator::output;

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use calculator::Calculator;
use cli::args::{Cli, Command, OperandArgs};
use config::Config;
use env::Env;
use models::Operation;
use output::OutputFormat;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let env = Env::real();

    logging::init(cli.verbose, &env);

    let explicit = cli.config.as_deref();
    match cli.command {
        Command::Add(args) => run_operation(Operation::Add, args, cli.format, explicit, &env),
        Command::Subtract(args) => {
            run_operation(Operation::Subtract, args, cli.format, explicit, &env)
        }
        Command::Multiply(args) => {
            run_operation(Operation::Multiply, args, cli.format, explicit, &env)
        }
        Command::Divide(args) => run_operation(Operation::Divide, args, cli.format, explicit, &env),
        Command::Config => run_config(explicit, &env),
        Command::Version => run_version(),
    }
}

/// Load layered configuration relative to the current working directory.
fn load_config(explicit: Option<&Path>, env: &Env) -> Result<Config> {
    let cwd = std::env::current_dir().ok();
    Config::load(explicit, cwd.as_deref(), env).context("failed to load configuration")
}

/// Evaluate one arithmetic command and print the rendered result.
fn run_operation(
    operation: Operation,
    args: OperandArgs,
    format: Option<OutputFormat>,
    explicit: Option<&Path>,
    env: &Env,
) -> Result<()> {
    let config = load_config(explicit, env)?;
    let format = format.unwrap_or(config.output.format);
    let limits = config
        .limits
        .to_limits()
        .context("invalid operand limits")?;
    let calc = Calculator::with_limits(limits);

    let evaluation = calc
        .evaluate(operation, args.a, args.b)
        .with_context(|| format!("cannot {operation} {} and {}", args.a, args.b))?;
    info!(expression = %evaluation.expression(), result = %evaluation.result, "evaluated");

    print!("{}", format.render(&evaluation));
    Ok(())
}

/// Print the effective configuration.
fn run_config(explicit: Option<&Path>, env: &Env) -> Result<()> {
    let config = load_config(explicit, env)?;
    let rendered = config.to_toml().context("failed to serialize configuration")?;
    print!("{rendered}");
    Ok(())
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}
