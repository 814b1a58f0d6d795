//! Range-checked four-function calculator.
//!
//! Every operation validates `a` then `b` against the calculator's
//! [`Limits`] before doing any arithmetic. Division additionally rejects
//! a zero divisor, but only once both operands are known to be in range.
//!
//! Only operands are range-checked. With limits near `f64::MAX` a float
//! result can overflow to `inf`, which is returned as-is.

pub mod error;

use tracing::debug;

use crate::models::{Evaluation, Limits, Operand, Operation};

pub use error::CalcError;

/// Stateless calculator service.
///
/// Holds only its (immutable) limits, so a single instance can be shared
/// freely across threads and reused for any number of calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator {
    limits: Limits,
}

impl Calculator {
    /// Create a calculator with the default `[-1_000_000, 1_000_000]` range.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with a custom operand range.
    pub fn with_limits(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Add two numbers.
    pub fn add(
        &self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<Operand, CalcError> {
        self.apply(Operation::Add, a.into(), b.into())
    }

    /// Subtract `b` from `a`.
    pub fn subtract(
        &self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<Operand, CalcError> {
        self.apply(Operation::Subtract, a.into(), b.into())
    }

    /// Multiply two numbers.
    pub fn multiply(
        &self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<Operand, CalcError> {
        self.apply(Operation::Multiply, a.into(), b.into())
    }

    /// Divide `a` by `b`. The result is always a float.
    pub fn divide(
        &self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<Operand, CalcError> {
        self.apply(Operation::Divide, a.into(), b.into())
    }

    /// Run `operation` and package the inputs with the result.
    pub fn evaluate(
        &self,
        operation: Operation,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<Evaluation, CalcError> {
        let (a, b) = (a.into(), b.into());
        let result = self.apply(operation, a, b)?;
        Ok(Evaluation {
            operation,
            a,
            b,
            result,
        })
    }

    /// Check a single operand against the limits.
    pub fn validate(&self, value: impl Into<Operand>) -> Result<(), CalcError> {
        let value = value.into();
        if self.limits.contains_operand(value) {
            return Ok(());
        }
        debug!(%value, min = self.limits.min(), max = self.limits.max(), "operand out of range");
        Err(CalcError::InvalidInput {
            value,
            min: self.limits.min(),
            max: self.limits.max(),
        })
    }

    fn apply(&self, operation: Operation, a: Operand, b: Operand) -> Result<Operand, CalcError> {
        debug!(%operation, %a, %b, "performing operation");

        self.validate(a)?;
        self.validate(b)?;

        let result = match operation {
            Operation::Add => combine(a, b, i64::checked_add, |x, y| x + y),
            Operation::Subtract => combine(a, b, i64::checked_sub, |x, y| x - y),
            Operation::Multiply => combine(a, b, i64::checked_mul, |x, y| x * y),
            Operation::Divide => {
                if b.is_zero() {
                    debug!(%a, "rejected division by zero");
                    return Err(CalcError::DivisionByZero);
                }
                Operand::Float(a.as_f64() / b.as_f64())
            }
        };

        Ok(result)
    }
}

/// Integer arithmetic when both sides are integers and the result fits,
/// float arithmetic otherwise.
fn combine(
    a: Operand,
    b: Operand,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Operand {
    if let (Operand::Int(x), Operand::Int(y)) = (a, b) {
        if let Some(result) = int_op(x, y) {
            return Operand::Int(result);
        }
    }
    Operand::Float(float_op(a.as_f64(), b.as_f64()))
}
