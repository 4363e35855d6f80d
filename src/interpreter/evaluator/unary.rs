use crate::ast::UnaryOperator;

/// Applies a unary operator to a value.
///
/// Supported operators:
/// - `Plus`: returns the value unchanged.
/// - `Negate`: arithmetic negation.
/// - `Percent`: divides the value by 100, so `50%` is `0.5`.
///
/// # Example
/// ```
/// use terracalc::{ast::UnaryOperator, interpreter::evaluator::unary::eval_unary};
///
/// assert_eq!(eval_unary(UnaryOperator::Negate, 5.0), -5.0);
/// assert_eq!(eval_unary(UnaryOperator::Percent, 50.0), 0.5);
/// ```
#[must_use]
pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
    match op {
        UnaryOperator::Plus => value,
        UnaryOperator::Negate => -value,
        UnaryOperator::Percent => value / 100.0,
    }
}
