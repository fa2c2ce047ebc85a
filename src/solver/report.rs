use std::time::Duration;

use crate::expression::{NodeRef, Value};

/// Outcome of a validated search: the distinct solutions plus phase timings
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Leaf nodes built from the input numbers, in input order
    pub numbers: Vec<NodeRef>,
    pub target: Value,
    /// Deduplicated solutions, sorted by rendering
    pub solutions: Vec<NodeRef>,
    /// Number of solutions before deduplication
    pub raw_count: usize,
    pub search_time: Duration,
    pub dedup_time: Duration,
}

impl SolveReport {
    pub fn is_solved(&self) -> bool {
        !self.solutions.is_empty()
    }

    /// Renderings of the distinct solutions
    pub fn rendered(&self) -> Vec<String> {
        self.solutions.iter().map(|s| s.render().to_string()).collect()
    }
}
