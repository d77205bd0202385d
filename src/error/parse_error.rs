#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while converting infix to postfix.
pub enum ParseError {
    /// A `)` had no matching `(`, or a `(` was never closed.
    MismatchedParentheses,
    /// Found a token that is not a number, an operator or a parenthesis.
    UnknownToken {
        /// The offending token, trimmed of surrounding whitespace.
        token: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MismatchedParentheses => write!(f, "Mismatched parentheses"),
            Self::UnknownToken { token } => write!(f, "Unknown token: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
