use thiserror::Error;

use crate::expression::Value;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Number list cannot be empty")]
    EmptyNumbers,
    #[error("At least two numbers are required, got {0}")]
    TooFewNumbers(usize),
    #[error("Numbers must not be negative: {0}")]
    NegativeNumber(Value),
}
