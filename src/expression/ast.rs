use std::sync::{Arc, OnceLock};

/// Integer type of leaves and intermediate results
pub type Value = i64;

/// Shared handle to a node; one subtree may be an operand of many candidate parents
pub type NodeRef = Arc<Node>;

/// The four arithmetic operators of the numbers game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Fixed enumeration order used by the search
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

/// Represents an expression tree built from the input numbers
///
/// Both variants memoise their textual rendering; operations additionally
/// memoise their value. The caches are written at most once.
#[derive(Debug)]
pub enum Node {
    Leaf {
        value: Value,
        text: OnceLock<String>,
    },
    Operation {
        op: Operator,
        left: NodeRef,
        right: NodeRef,
        value: OnceLock<Value>,
        text: OnceLock<String>,
    },
}

impl Node {
    /// Create a constant node
    pub fn leaf(value: Value) -> NodeRef {
        Arc::new(Node::Leaf {
            value,
            text: OnceLock::new(),
        })
    }

    /// Create an operation node without checking its operands.
    ///
    /// The caller guarantees that `op` is admissible for the operands' values
    /// (see [`Operator::check`]); the value itself is computed on first use.
    pub fn operation(op: Operator, left: NodeRef, right: NodeRef) -> NodeRef {
        Arc::new(Node::Operation {
            op,
            left,
            right,
            value: OnceLock::new(),
            text: OnceLock::new(),
        })
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn operator(&self) -> Option<Operator> {
        match self {
            Node::Leaf { .. } => None,
            Node::Operation { op, .. } => Some(*op),
        }
    }

    pub fn operands(&self) -> Option<(&NodeRef, &NodeRef)> {
        match self {
            Node::Leaf { .. } => None,
            Node::Operation { left, right, .. } => Some((left, right)),
        }
    }

    /// Height of the tree; a leaf has depth 0
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Operation { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Number of input numbers used by this expression
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Operation { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}
