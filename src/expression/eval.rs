use log::trace;

use crate::expression::ast::{Node, NodeRef, Operator, Value};
use crate::expression::errors::ExpressionError;

impl Operator {
    /// # Errors
    ///
    /// Returns an error when the operator cannot be applied exactly:
    /// - Division by zero
    /// - Division that leaves a remainder
    /// - A result that does not fit in [`Value`]
    pub fn check(self, left: Value, right: Value) -> Result<(), ExpressionError> {
        let result = match self {
            Operator::Add => left.checked_add(right),
            Operator::Sub => left.checked_sub(right),
            Operator::Mul => left.checked_mul(right),
            Operator::Div => {
                if right == 0 {
                    return Err(ExpressionError::DivisionByZero);
                }
                if left.checked_rem(right).is_some_and(|rem| rem != 0) {
                    return Err(ExpressionError::InexactDivision {
                        dividend: left,
                        divisor: right,
                    });
                }
                left.checked_div(right)
            }
        };

        match result {
            Some(_) => Ok(()),
            None => Err(ExpressionError::Overflow {
                op: self,
                left,
                right,
            }),
        }
    }

    /// Apply the operator with truncating integer division.
    ///
    /// Operands that fail [`Operator::check`] are an internal invariant
    /// violation: a zero divisor or a remainder panics here.
    pub fn apply(self, left: Value, right: Value) -> Value {
        match self {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
            Operator::Div => {
                assert!(
                    right != 0 && left % right == 0,
                    "inexact division reached evaluate"
                );
                left / right
            }
        }
    }
}

impl Node {
    /// Create an operation node after checking that `op` is admissible for
    /// the operands' evaluated values.
    ///
    /// # Errors
    ///
    /// Returns the [`ExpressionError`] reported by [`Operator::check`].
    pub fn try_operation(
        op: Operator,
        left: NodeRef,
        right: NodeRef,
    ) -> Result<NodeRef, ExpressionError> {
        let (l, r) = (left.evaluate(), right.evaluate());
        if let Err(e) = op.check(l, r) {
            trace!("Rejected {} {} {}: {}", l, op, r, e);
            return Err(e);
        }
        Ok(Node::operation(op, left, right))
    }

    /// Value of the expression, computed once and cached
    pub fn evaluate(&self) -> Value {
        match self {
            Node::Leaf { value, .. } => *value,
            Node::Operation {
                op,
                left,
                right,
                value,
                ..
            } => *value.get_or_init(|| op.apply(left.evaluate(), right.evaluate())),
        }
    }

    /// Whether the value has already been computed
    pub fn is_evaluated(&self) -> bool {
        match self {
            Node::Leaf { .. } => true,
            Node::Operation { value, .. } => value.get().is_some(),
        }
    }
}
