//! Utils module split into submodules

mod errors;
mod leaves;
mod validation;

pub use errors::UtilsError;
pub use leaves::leaves;
pub use validation::validate_numbers;
