//! Numeric operand type shared by the calculator, config, and renderers.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single numeric input or result.
///
/// Integers stay integers through add, subtract and multiply; any float
/// operand (and every division) promotes the result to [`Operand::Float`].
///
/// Float results are not range-checked, so with very wide limits they can
/// overflow to `inf`/`-inf`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    Int(i64),
    Float(f64),
}

/// 2^63: the smallest `f64` above every `i64`.
pub(crate) const I64_EXCLUSIVE_MAX: f64 = 9_223_372_036_854_775_808.0;

/// The `i64` exactly equal to `value`, if there is one.
pub(crate) fn exact_i64(value: f64) -> Option<i64> {
    (value.fract() == 0.0 && value >= -I64_EXCLUSIVE_MAX && value < I64_EXCLUSIVE_MAX)
        .then(|| value as i64)
}

/// Error returned when a string is not a number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid operand {input:?}: expected an integer or decimal number")]
pub struct ParseOperandError {
    pub input: String,
}

impl Operand {
    /// The value as `f64`, used for bounds checks and float arithmetic.
    pub fn as_f64(self) -> f64 {
        match self {
            Operand::Int(i) => i as f64,
            Operand::Float(f) => f,
        }
    }

    /// Returns `true` for `0`, `0.0` and `-0.0`.
    pub fn is_zero(self) -> bool {
        match self {
            Operand::Int(i) => i == 0,
            Operand::Float(f) => f == 0.0,
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, Operand::Float(_))
    }
}

/// Numeric equality. Mixed `Int`/`Float` pairs are equal only when the float
/// is exactly that integer, so `Int(2^53 + 1) != Float(2^53)`.
impl PartialEq for Operand {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Operand::Int(a), Operand::Int(b)) => a == b,
            (Operand::Float(a), Operand::Float(b)) => a == b,
            (Operand::Int(i), Operand::Float(f)) | (Operand::Float(f), Operand::Int(i)) => {
                exact_i64(f) == Some(i)
            }
        }
    }
}

impl PartialEq<i64> for Operand {
    fn eq(&self, other: &i64) -> bool {
        *self == Operand::Int(*other)
    }
}

impl PartialEq<f64> for Operand {
    fn eq(&self, other: &f64) -> bool {
        *self == Operand::Float(*other)
    }
}

impl Serialize for Operand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Operand::Int(i) => serializer.serialize_i64(i),
            Operand::Float(f) if f.is_finite() => serializer.serialize_f64(f),
            // JSON has no infinity; "inf" / "-inf" / "NaN" instead of null.
            Operand::Float(f) => serializer.collect_str(&f),
        }
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Int(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Int(i64::from(value))
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Operand::Float(f64::from(value))
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Int(i) => write!(f, "{i}"),
            // Keep a trailing ".0" so whole floats are distinguishable from ints.
            Operand::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            Operand::Float(v) => write!(f, "{v}"),
        }
    }
}

impl FromStr for Operand {
    type Err = ParseOperandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return Ok(Operand::Int(i));
        }
        trimmed
            .parse::<f64>()
            .map(Operand::Float)
            .map_err(|_| ParseOperandError {
                input: s.to_string(),
            })
    }
}
