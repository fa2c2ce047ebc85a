//! Expression node model split into submodules for clarity

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::{Node, NodeRef, Operator, Value};
pub use errors::ExpressionError;

#[cfg(test)]
mod tests;
