use tracing::{debug, trace};

use crate::{
    error::RuntimeError,
    interpreter::postfix::{Postfix, PostfixItem},
};

pub type EvalResult<T> = Result<T, RuntimeError>;

/// Reduces a postfix sequence to a single value.
///
/// Operands are pushed onto a value stack; each operator pops its right
/// operand, then its left operand, and pushes the result. Division by zero
/// is not an error and yields an infinity or NaN.
///
/// # Errors
/// Returns `RuntimeError::InvalidPostfixExpression` if an operator finds fewer
/// than two values on the stack, or if the sequence does not leave exactly one
/// value behind.
///
/// # Example
/// ```
/// use shunt::interpreter::{evaluator::evaluate, postfix::Postfix};
///
/// let postfix: Postfix = "8 3 - 2 -".parse().unwrap();
/// assert_eq!(evaluate(&postfix).unwrap(), 3.0);
/// ```
pub fn evaluate(postfix: &Postfix) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len() / 2 + 1);

    for item in postfix {
        match *item {
            PostfixItem::Operand(value) => stack.push(value),
            PostfixItem::Operator(op) => {
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    return Err(RuntimeError::insufficient_operands(op.symbol()));
                };
                let result = op.apply(left, right);
                trace!(left, %op, right, result, "applied operator");
                stack.push(result);
            },
        }
    }

    match stack.as_slice() {
        [result] => {
            debug!(%postfix, result, "evaluated postfix expression");
            Ok(*result)
        },
        values => Err(RuntimeError::dangling_operands(values.len())),
    }
}
