//! Shared types used across all modules.
//!
//! Operands, operations, evaluation records and operand limits live here
//! so the calculator, config and output modules don't reach into each
//! other's internals.

pub mod evaluation;
pub mod limits;
pub mod operand;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use evaluation::Evaluation;
pub use limits::Limits;
pub use operand::{Operand, ParseOperandError};

/// One of the four supported binary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Infix symbol used by the terminal renderer.
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "add"),
            Operation::Subtract => write!(f, "subtract"),
            Operation::Multiply => write!(f, "multiply"),
            Operation::Divide => write!(f, "divide"),
        }
    }
}

impl std::str::FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" | "+" => Ok(Operation::Add),
            "subtract" | "sub" | "-" => Ok(Operation::Subtract),
            "multiply" | "mul" | "*" | "x" => Ok(Operation::Multiply),
            "divide" | "div" | "/" => Ok(Operation::Divide),
            other => Err(format!(
                "unknown operation: '{other}'. Supported: add, subtract, multiply, divide"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_display() {
        assert_eq!(Operation::Add.to_string(), "add");
        assert_eq!(Operation::Subtract.to_string(), "subtract");
        assert_eq!(Operation::Multiply.to_string(), "multiply");
        assert_eq!(Operation::Divide.to_string(), "divide");
    }

    #[test]
    fn operation_symbols() {
        assert_eq!(Operation::Add.symbol(), '+');
        assert_eq!(Operation::Subtract.symbol(), '-');
        assert_eq!(Operation::Multiply.symbol(), '*');
        assert_eq!(Operation::Divide.symbol(), '/');
    }

    #[test]
    fn operation_from_name_or_symbol() {
        assert_eq!("add".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!("+".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!("SUB".parse::<Operation>(), Ok(Operation::Subtract));
        assert_eq!("*".parse::<Operation>(), Ok(Operation::Multiply));
        assert_eq!("Divide".parse::<Operation>(), Ok(Operation::Divide));
    }

    #[test]
    fn operation_from_str_invalid() {
        let err = "modulo".parse::<Operation>().unwrap_err();
        assert!(err.contains("unknown operation"));
        assert!(err.contains("modulo"));
    }

    #[test]
    fn operation_serde_lowercase() {
        let json = serde_json::to_string(&Operation::Multiply).unwrap();
        assert_eq!(json, "\"multiply\"");
        let back: Operation = serde_json::from_str("\"divide\"").unwrap();
        assert_eq!(back, Operation::Divide);
    }
}
