use logos::{FilterResult, Logos};

use crate::{error::ParseError, interpreter::operator::parse_number};

/// Represents a lexical token of an infix expression.
///
/// The delimiters `+ - * / ( )` are single-character tokens. Any run of other
/// characters between delimiters and spaces is a candidate number; runs that
/// are blank once trimmed are skipped, and runs that do not parse as a number
/// are reported as lexer errors.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r" +")]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `2.5`, `.5` or `1e3`.
    #[regex(r"[^+\-*/() ]+", number, allow_greedy = true)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Classifies a run of non-delimiter characters.
///
/// Whitespace around the run is not significant, and a run made only of
/// whitespace (a tab, say) is dropped.
fn number(lex: &logos::Lexer<Token>) -> FilterResult<f64, ()> {
    let slice = lex.slice().trim();
    if slice.is_empty() {
        return FilterResult::Skip;
    }
    parse_number(slice).map_or(FilterResult::Error(()), FilterResult::Emit)
}

/// Splits `source` into tokens, left to right.
///
/// The iterator is lazy: an unrecognised run is only reported when the
/// consumer reaches it, as `ParseError::UnknownToken`.
///
/// # Example
/// ```
/// use shunt::interpreter::lexer::{Token, tokenize};
///
/// let tokens: Vec<_> = tokenize("2*(1 +3)").collect::<Result<_, _>>().unwrap();
/// assert_eq!(tokens,
///            [Token::Number(2.0),
///             Token::Star,
///             Token::LParen,
///             Token::Number(1.0),
///             Token::Plus,
///             Token::Number(3.0),
///             Token::RParen]);
/// ```
pub fn tokenize(source: &str) -> impl Iterator<Item = Result<Token, ParseError>> + '_ {
    let mut lexer = Token::lexer(source);

    std::iter::from_fn(move || {
        let token = lexer.next()?;
        Some(token.map_err(|()| ParseError::UnknownToken { token: lexer.slice().trim().to_string() }))
    })
}
