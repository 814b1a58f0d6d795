//! Integration tests for the library functions backing each CLI command.
//!
//! The binary is a thin layer: load config, build a calculator from the
//! configured limits, evaluate, render. These tests drive the same path.

use calculator::config::{Config, ConfigError};
use calculator::env::Env;
use calculator::output::OutputFormat;
use calculator::{CalcError, Calculator, Operand, Operation};

fn no_env() -> Env {
    Env::mock(Vec::<(&str, &str)>::new())
}

fn evaluate_with(config: &Config, op: Operation, a: Operand, b: Operand) -> Result<String, CalcError> {
    let calc = Calculator::with_limits(config.limits.to_limits()?);
    let evaluation = calc.evaluate(op, a, b)?;
    Ok(config.output.format.render(&evaluation))
}

// ---------------------------------------------------------------------------
// arithmetic commands
// ---------------------------------------------------------------------------

#[test]
fn default_config_renders_terminal_line() {
    colored::control::set_override(false);
    let output = evaluate_with(
        &Config::default(),
        Operation::Divide,
        "7".parse().unwrap(),
        "2".parse().unwrap(),
    )
    .unwrap();
    assert_eq!(output, "7 / 2 = 3.5\n");
}

#[test]
fn json_config_renders_json() {
    let mut config = Config::default();
    config.output.format = OutputFormat::Json;

    let output = evaluate_with(&config, Operation::Subtract, Operand::Int(-5), Operand::Int(3))
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["operation"], "subtract");
    assert_eq!(parsed["result"], -8);
}

#[test]
fn out_of_range_operand_is_reported() {
    let err = evaluate_with(
        &Config::default(),
        Operation::Add,
        Operand::Int(1_000_001),
        Operand::Int(5),
    )
    .unwrap_err();
    assert!(err.is_invalid_input());
    assert!(err.to_string().contains("1000001"));
}

#[test]
fn division_by_zero_is_reported() {
    let err = evaluate_with(&Config::default(), Operation::Divide, Operand::Int(5), Operand::Int(0))
        .unwrap_err();
    assert_eq!(err, CalcError::DivisionByZero);
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

#[test]
fn config_file_narrows_limits() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".calculator.toml"),
        "[limits]\nmin = -10\nmax = 10\n",
    )
    .unwrap();

    let config = Config::load(None, Some(dir.path()), &no_env()).unwrap();
    let err = evaluate_with(&config, Operation::Add, Operand::Int(11), Operand::Int(0)).unwrap_err();
    assert!(err.is_invalid_input());

    let ok = evaluate_with(&config, Operation::Add, Operand::Int(10), Operand::Int(0));
    assert!(ok.is_ok());
}

#[test]
fn env_selects_json_format() {
    let dir = tempfile::tempdir().unwrap();
    let env = Env::mock([("CALCULATOR_FORMAT", "json")]);
    let config = Config::load(None, Some(dir.path()), &env).unwrap();
    assert_eq!(config.output.format, OutputFormat::Json);
}

#[test]
fn env_limits_that_invert_the_range_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let env = Env::mock([("CALCULATOR_MIN", "50"), ("CALCULATOR_MAX", "-50")]);
    let err = Config::load(None, Some(dir.path()), &env).unwrap_err();
    assert!(matches!(err, ConfigError::Limits(_)));
}

#[test]
fn effective_config_prints_as_toml() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(None, Some(dir.path()), &no_env()).unwrap();
    let rendered = config.to_toml().unwrap();
    assert!(rendered.contains("[output]"));
    assert!(rendered.contains("[limits]"));
}
