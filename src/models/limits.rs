//! Inclusive operand range.

use crate::calculator::CalcError;
use crate::constants::{DEFAULT_MAX, DEFAULT_MIN};
use crate::models::operand::{I64_EXCLUSIVE_MAX, Operand};

/// Inclusive `[min, max]` range every operand must fall within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    min: f64,
    max: f64,
}

impl Limits {
    /// Build a range, rejecting non-finite bounds and `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self, CalcError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(CalcError::InvalidLimits { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Inclusive on both ends. NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Exact inclusive check for an integer, without rounding it through `f64`.
    pub fn contains_int(&self, value: i64) -> bool {
        let above_min = self.min <= -I64_EXCLUSIVE_MAX
            || (self.min < I64_EXCLUSIVE_MAX && value >= self.min.ceil() as i64);
        let below_max = self.max >= I64_EXCLUSIVE_MAX
            || (self.max >= -I64_EXCLUSIVE_MAX && value <= self.max.floor() as i64);
        above_min && below_max
    }

    /// Range check for either operand kind.
    pub fn contains_operand(&self, value: Operand) -> bool {
        match value {
            Operand::Int(i) => self.contains_int(i),
            Operand::Float(f) => self.contains(f),
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}
