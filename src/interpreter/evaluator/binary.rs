use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator, require},
};

impl Evaluator {
    /// Evaluates a left-nested run of binary operations, such as
    /// `1 + 2 - 3 * 4`, without recursing once per operator.
    ///
    /// The operands are evaluated strictly left to right. Each operation is
    /// applied as soon as its right operand is known.
    pub(crate) fn eval_binary_chain(&mut self, expr: &Expr) -> EvalResult<Option<f64>> {
        let mut steps = Vec::new();
        let mut leftmost = expr;
        while let Expr::Binary { left, op, right } = leftmost {
            steps.push((*op, right.as_ref()));
            leftmost = left.as_ref();
        }

        let mut value = self.eval(leftmost)?;
        for (op, right) in steps.into_iter().rev() {
            let right = self.eval(right)?;
            value = Some(eval_binary(op, require(value)?, require(right)?)?);
        }
        Ok(value)
    }
}

/// Evaluates a binary operation between two values.
///
/// `/` and `mod` refuse a right operand of exactly zero. `mod` is the
/// floating point remainder, whose sign follows the dividend. `^` is the real
/// power function and may produce `NaN` or an infinity for inputs outside its
/// domain; those are returned as they are.
///
/// # Errors
/// Returns `DivisionByZero` for `x / 0` and `x mod 0`.
///
/// # Example
/// ```
/// use terracalc::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Mod, -7.0, 3.0).unwrap(), -1.0);
/// assert!(eval_binary(BinaryOperator::Div, 1.0, 0.0).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
    match op {
        BinaryOperator::Add => Ok(left + right),
        BinaryOperator::Sub => Ok(left - right),
        BinaryOperator::Mul => Ok(left * right),
        BinaryOperator::Div | BinaryOperator::Mod if right == 0.0 => {
            Err(RuntimeError::DivisionByZero)
        },
        BinaryOperator::Div => Ok(left / right),
        BinaryOperator::Mod => Ok(left % right),
        BinaryOperator::Pow => Ok(left.powf(right)),
    }
}
