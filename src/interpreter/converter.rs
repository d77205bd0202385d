use tracing::{debug, trace};

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        operator::BinaryOperator,
        postfix::{Postfix, PostfixItem},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// An entry on the converter's pending-operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StackEntry {
    Operator(BinaryOperator),
    LParen,
}

impl StackEntry {
    /// `(` reports 0 so that pushing an operator never pops past it.
    const fn precedence(self) -> u8 {
        match self {
            Self::Operator(op) => op.precedence(),
            Self::LParen => 0,
        }
    }
}

/// Converts an infix expression into postfix order.
///
/// This is the shunting-yard algorithm. Operators of equal precedence are
/// popped before the incoming one is pushed, which makes every operator
/// left-associative: `8 - 3 - 2` becomes `8 3 - 2 -`.
///
/// # Errors
/// - `ParseError::MismatchedParentheses` if a `)` has no matching `(` or a `(`
///   is never closed.
/// - `ParseError::UnknownToken` if a token is not a number, operator or
///   parenthesis.
///
/// # Example
/// ```
/// use shunt::interpreter::converter::to_postfix;
///
/// let postfix = to_postfix("3 + 5 * (2 - 4)").unwrap();
/// assert_eq!(postfix.to_string(), "3 5 2 4 - * +");
/// ```
pub fn to_postfix(source: &str) -> ParseResult<Postfix> {
    let postfix = convert(tokenize(source))?;
    debug!(source, %postfix, "converted expression");
    Ok(postfix)
}

/// Converts a stream of infix tokens into postfix order.
///
/// Tokens are consumed left to right and the first error encountered is
/// returned, whether it comes from the token stream or from the conversion
/// itself.
pub fn convert<I>(tokens: I) -> ParseResult<Postfix>
    where I: IntoIterator<Item = ParseResult<Token>>
{
    let mut output = Postfix::new();
    let mut stack: Vec<StackEntry> = Vec::new();

    for token in tokens {
        let token = token?;
        trace!(?token, depth = stack.len(), "converting token");

        match token {
            Token::Number(value) => output.push(PostfixItem::Operand(value)),
            Token::Plus => push_operator(&mut output, &mut stack, BinaryOperator::Add)?,
            Token::Minus => push_operator(&mut output, &mut stack, BinaryOperator::Sub)?,
            Token::Star => push_operator(&mut output, &mut stack, BinaryOperator::Mul)?,
            Token::Slash => push_operator(&mut output, &mut stack, BinaryOperator::Div)?,
            Token::LParen => stack.push(StackEntry::LParen),
            Token::RParen => loop {
                match stack.pop() {
                    Some(StackEntry::LParen) => break,
                    Some(StackEntry::Operator(op)) => output.push(PostfixItem::Operator(op)),
                    None => return Err(ParseError::MismatchedParentheses),
                }
            },
        }
    }

    while let Some(entry) = stack.pop() {
        push_entry(&mut output, entry)?;
    }

    Ok(output)
}

/// Pops every pending entry that binds at least as tightly as `op`, then
/// pushes `op`.
fn push_operator(output: &mut Postfix,
                 stack: &mut Vec<StackEntry>,
                 op: BinaryOperator)
                 -> ParseResult<()> {
    while let Some(&top) = stack.last()
          && top.precedence() >= op.precedence()
    {
        stack.pop();
        push_entry(output, top)?;
    }
    stack.push(StackEntry::Operator(op));
    Ok(())
}

/// Moves a popped stack entry to the output; a `(` here was never closed.
fn push_entry(output: &mut Postfix, entry: StackEntry) -> ParseResult<()> {
    match entry {
        StackEntry::Operator(op) => {
            output.push(PostfixItem::Operator(op));
            Ok(())
        },
        StackEntry::LParen => Err(ParseError::MismatchedParentheses),
    }
}
