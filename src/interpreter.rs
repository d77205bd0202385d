/// The converter module rewrites infix expressions into postfix order.
///
/// It drives the lexer and runs the shunting-yard algorithm over the token
/// stream, resolving precedence, associativity and parentheses so that the
/// result can be evaluated with a single stack.
///
/// # Responsibilities
/// - Orders operators by precedence and left-associativity.
/// - Removes parentheses, reporting unbalanced ones.
/// - Surfaces unknown tokens at the position they occur.
pub mod converter;
/// The evaluator module reduces postfix sequences to a number.
///
/// # Responsibilities
/// - Applies each operator to the two most recent values.
/// - Reports sequences that do not reduce to exactly one value.
pub mod evaluator;
/// The lexer module tokenizes infix expressions.
///
/// The lexer splits the raw text on operators, parentheses and spaces, and
/// classifies everything in between as a number once, so that later stages
/// dispatch on a closed set of tokens.
pub mod lexer;
/// Operator definitions and token classification helpers.
pub mod operator;
/// The postfix sequence shared by the converter and the evaluator.
pub mod postfix;
