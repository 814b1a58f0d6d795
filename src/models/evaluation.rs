//! Record of a single successful calculation.

use serde::{Deserialize, Serialize};

use super::{Operand, Operation};

/// The inputs and result of one calculator call, as handed to renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub operation: Operation,
    pub a: Operand,
    pub b: Operand,
    pub result: Operand,
}

impl Evaluation {
    /// `a <symbol> b` without the result, e.g. `7 / 2`.
    pub fn expression(&self) -> String {
        format!("{} {} {}", self.a, self.operation.symbol(), self.b)
    }
}
