/// Configuration for the search
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Split the top-level pair loop across the rayon thread pool
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}
