//! Snapshot tests for output renderers.
//!
//! Renders a standard set of evaluations and compares the output against
//! expected fixture files.

use pretty_assertions::assert_eq;

use calculator::models::{Evaluation, Operand, Operation};
use calculator::output::json::JsonRenderer;
use calculator::output::terminal::TerminalRenderer;
use calculator::output::OutputRenderer;

/// Standard evaluations used across the snapshot tests.
fn test_evaluations() -> Vec<Evaluation> {
    vec![
        Evaluation {
            operation: Operation::Add,
            a: Operand::Int(1_000_000),
            b: Operand::Int(0),
            result: Operand::Int(1_000_000),
        },
        Evaluation {
            operation: Operation::Multiply,
            a: Operand::Int(-5),
            b: Operand::Int(-3),
            result: Operand::Int(15),
        },
        Evaluation {
            operation: Operation::Divide,
            a: Operand::Int(7),
            b: Operand::Int(2),
            result: Operand::Float(3.5),
        },
    ]
}

#[test]
fn snapshot_json_renderer() {
    let actual: Vec<serde_json::Value> = test_evaluations()
        .iter()
        .map(|e| serde_json::from_str(&JsonRenderer.render(e)).unwrap())
        .collect();

    let expected_str =
        std::fs::read_to_string("tests/fixtures/expected_json_output.json").unwrap();
    let expected: Vec<serde_json::Value> = serde_json::from_str(&expected_str).unwrap();

    assert_eq!(actual, expected);
}

#[test]
fn snapshot_terminal_renderer() {
    colored::control::set_override(false);
    let output: String = test_evaluations()
        .iter()
        .map(|e| TerminalRenderer.render(e))
        .collect();

    let expected =
        std::fs::read_to_string("tests/fixtures/expected_terminal_output.txt").unwrap();

    assert_eq!(output, expected);
}
