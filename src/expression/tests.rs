use crate::expression::ast::{Node, Operator};
use crate::expression::errors::ExpressionError;

#[test]
fn test_leaf_evaluates_to_its_value() {
    let leaf = Node::leaf(42);
    assert_eq!(leaf.evaluate(), 42);
    assert!(leaf.is_leaf());
    assert_eq!(leaf.operator(), None);
    assert!(leaf.operands().is_none());
}

#[test]
fn test_operations_evaluate() {
    let cases = [
        (Operator::Add, 12, 4, 16),
        (Operator::Sub, 12, 4, 8),
        (Operator::Mul, 12, 4, 48),
        (Operator::Div, 12, 4, 3),
    ];
    for (op, a, b, expected) in cases {
        let node = Node::operation(op, Node::leaf(a), Node::leaf(b));
        assert_eq!(node.evaluate(), expected, "{} {} {}", a, op, b);
    }
}

#[test]
fn test_evaluation_is_lazy_and_cached() {
    let node = Node::operation(Operator::Mul, Node::leaf(6), Node::leaf(7));
    assert!(!node.is_evaluated());
    assert_eq!(node.evaluate(), 42);
    assert!(node.is_evaluated());
    assert_eq!(node.evaluate(), 42);
}

#[test]
fn test_render_leaf_and_operation() {
    let leaf = Node::leaf(100);
    assert_eq!(leaf.render(), "100");

    let inner = Node::operation(Operator::Add, Node::leaf(2), Node::leaf(1));
    let outer = Node::operation(Operator::Mul, Node::leaf(9), inner);
    assert_eq!(outer.render(), "(9 * (2 + 1))");
    assert_eq!(format!("{}", outer), "(9 * (2 + 1))");
}

#[test]
fn test_render_symbols() {
    let symbols: Vec<char> = Operator::ALL.iter().map(|op| op.symbol()).collect();
    assert_eq!(symbols, vec!['+', '-', '*', '/']);

    let node = Node::operation(Operator::Div, Node::leaf(4), Node::leaf(2));
    assert_eq!(node.render(), "(4 / 2)");
    let node = Node::operation(Operator::Sub, Node::leaf(4), Node::leaf(2));
    assert_eq!(node.render(), "(4 - 2)");
}

#[test]
fn test_render_is_cached() {
    let node = Node::operation(Operator::Add, Node::leaf(2), Node::leaf(1));
    assert!(!node.is_rendered());
    let first = node.render().as_ptr();
    assert!(node.is_rendered());
    let second = node.render().as_ptr();
    assert_eq!(first, second);
}

#[test]
fn test_shared_operand() {
    let shared = Node::operation(Operator::Add, Node::leaf(3), Node::leaf(2));
    let a = Node::operation(Operator::Mul, shared.clone(), Node::leaf(4));
    let b = Node::operation(Operator::Sub, shared.clone(), Node::leaf(1));
    assert_eq!(a.evaluate(), 20);
    assert_eq!(b.evaluate(), 4);
    assert!(shared.is_evaluated());
    assert_eq!(std::sync::Arc::strong_count(&shared), 3);
}

#[test]
fn test_depth_and_leaf_count() {
    let inner = Node::operation(Operator::Add, Node::leaf(2), Node::leaf(1));
    let outer = Node::operation(Operator::Mul, Node::leaf(9), inner);
    assert_eq!(outer.depth(), 2);
    assert_eq!(outer.leaf_count(), 3);
    assert_eq!(Node::leaf(5).depth(), 0);
}

#[test]
fn test_check_rejects_division_by_zero() {
    assert_eq!(
        Operator::Div.check(5, 0),
        Err(ExpressionError::DivisionByZero)
    );
}

#[test]
fn test_check_rejects_inexact_division() {
    assert_eq!(
        Operator::Div.check(7, 2),
        Err(ExpressionError::InexactDivision {
            dividend: 7,
            divisor: 2
        })
    );
    assert!(Operator::Div.check(8, 2).is_ok());
    assert!(Operator::Div.check(0, 3).is_ok());
}

#[test]
fn test_check_rejects_overflow() {
    let result = Operator::Mul.check(i64::MAX, 2);
    assert!(matches!(result, Err(ExpressionError::Overflow { .. })));
    let result = Operator::Add.check(i64::MAX, 1);
    assert!(matches!(result, Err(ExpressionError::Overflow { .. })));
}

#[test]
fn test_try_operation() {
    let ok = Node::try_operation(Operator::Div, Node::leaf(9), Node::leaf(3));
    assert!(ok.is_ok());
    if let Ok(node) = ok {
        assert_eq!(node.evaluate(), 3);
    }

    let err = Node::try_operation(Operator::Div, Node::leaf(9), Node::leaf(2));
    assert!(err.is_err());
}

#[test]
fn test_error_messages() {
    assert_eq!(ExpressionError::DivisionByZero.to_string(), "Division by zero");
    let err = ExpressionError::Overflow {
        op: Operator::Mul,
        left: 3,
        right: 4,
    };
    assert_eq!(err.to_string(), "Integer overflow in 3 * 4");
}

#[test]
#[should_panic(expected = "inexact division reached evaluate")]
fn test_unchecked_inexact_division_panics() {
    let node = Node::operation(Operator::Div, Node::leaf(7), Node::leaf(2));
    let _ = node.evaluate();
}

#[test]
#[should_panic(expected = "inexact division reached evaluate")]
fn test_unchecked_division_by_zero_panics() {
    let node = Node::operation(Operator::Div, Node::leaf(7), Node::leaf(0));
    let _ = node.evaluate();
}

#[test]
fn test_rejected_operation_leaves_operands_unrendered() {
    let left = Node::operation(Operator::Add, Node::leaf(4), Node::leaf(3));
    let right = Node::operation(Operator::Sub, Node::leaf(5), Node::leaf(3));
    let result = Node::try_operation(Operator::Div, left.clone(), right.clone());
    assert!(result.is_err());
    assert!(left.is_evaluated());
    assert!(!left.is_rendered());
    assert!(!right.is_rendered());
}
