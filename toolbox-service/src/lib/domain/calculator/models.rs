use std::fmt;
use std::str::FromStr;

use crate::calculator::errors::CalculationError;
use crate::calculator::errors::OperatorError;

/// One of the four supported arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Symbol used on the wire.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }
}

impl FromStr for Operator {
    type Err = OperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            other => Err(OperatorError::Unsupported(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A binary arithmetic expression over two floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub operand1: f64,
    pub operand2: f64,
    pub operator: Operator,
}

impl Calculation {
    pub fn new(operand1: f64, operand2: f64, operator: Operator) -> Self {
        Self {
            operand1,
            operand2,
            operator,
        }
    }

    /// Evaluate `operand1 <operator> operand2` with IEEE-754 semantics.
    ///
    /// # Errors
    /// * `DivisionByZero` - Operator is `/` and `operand2` is exactly zero
    /// * `NonFiniteResult` - Result overflowed to infinity or is NaN
    pub fn evaluate(&self) -> Result<f64, CalculationError> {
        let (a, b) = (self.operand1, self.operand2);
        let result = match self.operator {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
            Operator::Divide if b == 0.0 => return Err(CalculationError::DivisionByZero),
            Operator::Divide => a / b,
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalculationError::NonFiniteResult)
        }
    }
}
