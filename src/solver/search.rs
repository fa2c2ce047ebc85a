use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::expression::{Node, NodeRef, Operator, Value};
use crate::solver::config::SolverConfig;
use crate::solver::dedup::dedup_solutions;
use crate::solver::errors::SolverError;
use crate::solver::report::SolveReport;
use crate::utils::{leaves, validate_numbers};

/// Exhaustive solver for the numbers game
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Validate the input, search every combination and deduplicate the hits.
    ///
    /// # Errors
    ///
    /// Returns an error if `numbers` fails [`validate_numbers`].
    pub fn find_solutions(
        &self,
        numbers: &[Value],
        target: Value,
    ) -> Result<SolveReport, SolverError> {
        validate_numbers(numbers)?;
        let nodes = leaves(numbers);

        let started = Instant::now();
        let raw = self.solve(&nodes, target);
        let search_time = started.elapsed();
        let raw_count = raw.len();

        let started = Instant::now();
        let solutions = dedup_solutions(raw);
        let dedup_time = started.elapsed();

        info!(
            "{} solutions ({} distinct) in {:?}, deduplicated in {:?}",
            raw_count,
            solutions.len(),
            search_time,
            dedup_time
        );

        Ok(SolveReport {
            numbers: nodes,
            target,
            solutions,
            raw_count,
            search_time,
            dedup_time,
        })
    }

    /// Every operation-rooted expression over `nodes` that evaluates to `target`.
    ///
    /// The result is in enumeration order and may contain expressions with
    /// equal renderings; see [`dedup_solutions`]. `nodes` is not modified.
    pub fn solve(&self, nodes: &[NodeRef], target: Value) -> Vec<NodeRef> {
        info!(
            "Starting {} search over {} nodes for target {}",
            if self.config.parallel { "parallel" } else { "sequential" },
            nodes.len(),
            target
        );

        let solutions: Vec<NodeRef> = if self.config.parallel {
            // Branches are collected by index so the output order matches the
            // sequential search.
            (0..nodes.len())
                .into_par_iter()
                .map(|first| search_from(nodes, first, target))
                .collect::<Vec<_>>()
                .into_iter()
                .flatten()
                .collect()
        } else {
            search(nodes, target)
        };

        info!("Search finished with {} solutions", solutions.len());
        solutions
    }
}

impl Default for ExpressionSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

fn search(nodes: &[NodeRef], target: Value) -> Vec<NodeRef> {
    let mut solutions = Vec::new();
    for first in 0..nodes.len() {
        solutions.extend(search_from(nodes, first, target));
    }
    solutions
}

/// Try every pair whose larger operand is the node at `first`.
///
/// Pairs are only combined as `larger op smaller`, so subtraction never goes
/// negative and each unordered pair is visited once. Equal values are taken
/// once, with the earlier position on the left; this admits pairs such as
/// `(9 - 5)` with `4`, so the solution count for `{100, 50, 9, 5, 2, 4} -> 784`
/// differs from a search that only combines `a > b`.
fn search_from(nodes: &[NodeRef], first: usize, target: Value) -> Vec<NodeRef> {
    let mut solutions = Vec::new();
    let Some(a) = nodes.get(first) else {
        return solutions;
    };
    let a_value = a.evaluate();

    for (second, b) in nodes.iter().enumerate() {
        let b_value = b.evaluate();
        if second == first || a_value < b_value || (a_value == b_value && second < first) {
            continue;
        }

        let rest: Vec<NodeRef> = nodes
            .iter()
            .enumerate()
            .filter(|&(k, _)| k != first && k != second)
            .map(|(_, node)| Arc::clone(node))
            .collect();

        for op in Operator::ALL {
            let Ok(combined) = Node::try_operation(op, Arc::clone(a), Arc::clone(b)) else {
                continue;
            };

            // Keep going after a hit: adding zero or multiplying by one can
            // still reach the target from here.
            if combined.evaluate() == target {
                debug!(
                    "Found {} = {} (depth {}, {} numbers)",
                    combined,
                    target,
                    combined.depth(),
                    combined.leaf_count()
                );
                solutions.push(Arc::clone(&combined));
            }

            if !rest.is_empty() {
                let mut next = Vec::with_capacity(rest.len() + 1);
                next.extend(rest.iter().cloned());
                next.push(combined);
                solutions.extend(search(&next, target));
            }
        }
    }

    solutions
}
