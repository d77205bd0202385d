//! # shunt
//!
//! shunt is an infix arithmetic calculator written in Rust.
//! It rewrites expressions made of numbers, `+ - * /` and parentheses into
//! postfix order with the shunting-yard algorithm, then evaluates the postfix
//! sequence with a single value stack.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{converter::to_postfix, evaluator::evaluate, postfix::Postfix};

/// Provides the error types for conversion and evaluation.
///
/// This module defines every failure the pipeline can report. Conversion
/// failures (unbalanced parentheses, unknown tokens) and evaluation failures
/// (malformed postfix sequences) are kept apart so callers can tell which
/// stage rejected the input.
///
/// # Responsibilities
/// - Defines error enums for the converter and the evaluator.
/// - Provides human-readable messages through `Display`.
/// - Integrates with `std::error::Error` for propagation with `?`.
pub mod error;
/// Runs the two pipeline stages.
///
/// This module ties together the lexer, the shunting-yard converter, the
/// postfix sequence type and the evaluator.
///
/// # Responsibilities
/// - Tokenizes raw input into a closed set of tokens.
/// - Converts infix token streams into postfix sequences.
/// - Evaluates postfix sequences to a floating-point result.
pub mod interpreter;
/// General helpers shared by the library and the command line tool.
pub mod util;

/// Returns the value of an infix expression.
///
/// The expression is converted to postfix order and evaluated in one call; no
/// state is kept between calls.
///
/// # Errors
/// Returns an error if the expression has unbalanced parentheses, contains an
/// unknown token, or does not reduce to a single value (for example `3 +`).
///
/// # Examples
/// ```
/// use shunt::get_result;
///
/// assert_eq!(get_result("3 + 5 * (2 - 4)").unwrap(), -7.0);
/// assert!(get_result("10 / 0").unwrap().is_infinite());
///
/// // Unclosed parenthesis.
/// assert!(get_result("(1 + 2").is_err());
/// ```
pub fn get_result(source: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let postfix = to_postfix(source)?;
    Ok(evaluate(&postfix)?)
}

/// Returns the postfix form of an infix expression without evaluating it.
///
/// # Examples
/// ```
/// use shunt::get_postfix;
///
/// assert_eq!(get_postfix("8 - 3 - 2").unwrap().to_string(), "8 3 - 2 -");
/// ```
pub fn get_postfix(source: &str) -> Result<Postfix, Box<dyn std::error::Error>> {
    Ok(to_postfix(source)?)
}

/// Returns the value of an expression written in postfix notation.
///
/// Words are separated by whitespace and must each be a number or one of
/// `+ - * /`.
///
/// # Examples
/// ```
/// use shunt::evaluate_postfix_str;
///
/// assert_eq!(evaluate_postfix_str("3 5 2 4 - * +").unwrap(), -7.0);
/// assert!(evaluate_postfix_str("1 +").is_err());
/// ```
pub fn evaluate_postfix_str(source: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let postfix: Postfix = source.parse()?;
    Ok(evaluate(&postfix)?)
}
