use thiserror::Error;

use crate::expression::ast::{Operator, Value};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Division with remainder: {dividend} / {divisor}")]
    InexactDivision { dividend: Value, divisor: Value },
    #[error("Integer overflow in {left} {op} {right}")]
    Overflow {
        op: Operator,
        left: Value,
        right: Value,
    },
}
