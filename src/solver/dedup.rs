use log::debug;

use crate::expression::NodeRef;

/// Collapse solutions that render to the same string.
///
/// Solutions are sorted by their rendering and consecutive equal renderings
/// are dropped, keeping the first. Expressions that differ only in grouping
/// or operand order are not considered equal.
pub fn dedup_solutions(mut solutions: Vec<NodeRef>) -> Vec<NodeRef> {
    let before = solutions.len();

    solutions.sort_by(|a, b| a.render().cmp(b.render()));
    solutions.dedup_by(|a, b| a.render() == b.render());

    debug!(
        "Deduplicated {} solutions down to {} distinct renderings",
        before,
        solutions.len()
    );
    solutions
}
