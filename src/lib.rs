//! Countdown - An exhaustive solver for the Countdown numbers game
//!
//! Given a set of non-negative integers and a target, this library finds every
//! expression tree built with `+`, `-`, `*` and exact `/` over a subset of the
//! numbers that evaluates to the target.

pub mod expression;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{ExpressionError, Node, NodeRef, Operator, Value};
pub use solver::{ExpressionSolver, SolveReport, SolverConfig, SolverError, dedup_solutions};
pub use utils::{UtilsError, leaves, validate_numbers};

/// Find the distinct renderings of every expression over `numbers` that
/// evaluates to `target`
///
/// This is a convenience function that creates a default solver, runs the
/// search and the deduplication pass, and returns the renderings sorted.
///
/// # Arguments
///
/// * `numbers` - The available numbers; each may be used at most once
/// * `target` - The value to reach
///
/// # Errors
///
/// This function will return an error if:
/// * The number list is empty or holds a single number
/// * Any number is negative
///
/// # Examples
///
/// ```
/// use countdown::find_solutions;
///
/// match find_solutions(&[4, 2], 2) {
///     Ok(solutions) => assert_eq!(solutions, vec!["(4 - 2)", "(4 / 2)"]),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_solutions(numbers: &[Value], target: Value) -> Result<Vec<String>, SolverError> {
    let solver = ExpressionSolver::default();
    Ok(solver.find_solutions(numbers, target)?.rendered())
}
