#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum RuntimeError {
    /// The postfix sequence cannot be reduced to exactly one value.
    InvalidPostfixExpression {
        /// Details about what went wrong.
        details: String,
    },
}

impl RuntimeError {
    /// An operator was reached with fewer than two values on the stack.
    pub(crate) fn insufficient_operands(symbol: char) -> Self {
        Self::InvalidPostfixExpression { details: format!("insufficient operands for '{symbol}'") }
    }

    /// The sequence ended with `count` values on the stack instead of one.
    pub(crate) fn dangling_operands(count: usize) -> Self {
        let details = format!("malformed expression, {count} values left on the stack");
        Self::InvalidPostfixExpression { details }
    }

    /// A word of textual postfix input is neither a number nor an operator.
    pub(crate) fn unrecognized_token(token: &str) -> Self {
        Self::InvalidPostfixExpression { details: format!("unrecognized token '{token}'") }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPostfixExpression { details } => {
                write!(f, "Invalid postfix expression: {details}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
