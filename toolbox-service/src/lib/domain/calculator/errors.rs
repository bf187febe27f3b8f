use thiserror::Error;

/// Error for operator parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OperatorError {
    #[error("Unsupported operator: {0:?} (expected one of '+', '-', '*', '/')")]
    Unsupported(String),
}

/// Error raised while evaluating a calculation
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CalculationError {
    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Result is not a finite number")]
    NonFiniteResult,
}
