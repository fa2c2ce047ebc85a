use std::fmt;

use crate::expression::ast::{Node, Operator};

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Node {
    /// Fully parenthesised rendering, computed once and cached.
    ///
    /// A leaf renders as its decimal value, an operation as
    /// `(left op right)`.
    pub fn render(&self) -> &str {
        match self {
            Node::Leaf { value, text } => text.get_or_init(|| value.to_string()),
            Node::Operation {
                op,
                left,
                right,
                text,
                ..
            } => text.get_or_init(|| format!("({} {} {})", left.render(), op, right.render())),
        }
    }

    /// Whether the rendering has already been computed
    pub fn is_rendered(&self) -> bool {
        match self {
            Node::Leaf { text, .. } | Node::Operation { text, .. } => text.get().is_some(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.render())
    }
}
