//! Calculator error type.

use thiserror::Error;

use crate::models::Operand;

/// Errors returned by [`Calculator`](super::Calculator) operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// An operand fell outside the configured inclusive range.
    #[error("invalid input: {value} is outside the allowed range [{min}, {max}]")]
    InvalidInput { value: Operand, min: f64, max: f64 },

    /// The divisor was zero. Only checked after both operands are in range.
    #[error("division by zero")]
    DivisionByZero,

    #[error("invalid limits: min ({min}) and max ({max}) must be finite with min <= max")]
    InvalidLimits { min: f64, max: f64 },
}

impl CalcError {
    /// Returns `true` for range violations on an operand.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CalcError::InvalidInput { .. })
    }

    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, CalcError::DivisionByZero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message_names_value_and_range() {
        let err = CalcError::InvalidInput {
            value: Operand::Int(1_000_001),
            min: -1_000_000.0,
            max: 1_000_000.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid input: 1000001 is outside the allowed range [-1000000, 1000000]"
        );
        assert!(err.is_invalid_input());
        assert!(!err.is_division_by_zero());
    }

    #[test]
    fn division_by_zero_message() {
        let err = CalcError::DivisionByZero;
        assert_eq!(err.to_string(), "division by zero");
        assert!(err.is_division_by_zero());
        assert!(!err.is_invalid_input());
    }
}
