/// Conversion errors.
///
/// Defines the errors that can occur while tokenizing an infix expression and
/// rewriting it into postfix order: unbalanced parentheses and tokens that are
/// neither numbers, operators nor parentheses.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors raised while reducing a postfix sequence to a single
/// value, such as an operator without enough operands or operands left over
/// once the sequence is exhausted.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
