mod config;
mod dedup;
mod errors;
mod report;
mod search;

pub use config::SolverConfig;
pub use dedup::dedup_solutions;
pub use errors::SolverError;
pub use report::SolveReport;
pub use search::ExpressionSolver;
