use crate::expression::{Node, NodeRef, Value};

/// One leaf node per input number, in input order
pub fn leaves(numbers: &[Value]) -> Vec<NodeRef> {
    numbers.iter().map(|&n| Node::leaf(n)).collect()
}
