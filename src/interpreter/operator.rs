use std::fmt;

/// The four binary arithmetic operators.
///
/// Every operator is binary and left-associative. Precedence follows the usual
/// convention: multiplication and division bind tighter than addition and
/// subtraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Looks up the operator spelled exactly as `symbol`.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::operator::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("*"), Some(BinaryOperator::Mul));
    /// assert_eq!(BinaryOperator::from_symbol("**"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    /// The character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Binding strength: 2 for `*` and `/`, 1 for `+` and `-`.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Computes `left <op> right`.
    ///
    /// Division follows IEEE-754, so dividing by zero yields an infinity or
    /// NaN rather than an error.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::operator::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(8.0, 3.0), 5.0);
    /// assert!(BinaryOperator::Div.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Parses `token` with the standard `f64` parser.
///
/// Accepts whatever `f64::from_str` accepts: digits with an optional decimal
/// point, exponents, and the `inf`/`nan` spellings.
#[must_use]
pub fn parse_number(token: &str) -> Option<f64> {
    token.parse().ok()
}

/// Returns `true` if `token` is a numeric literal.
#[must_use]
pub fn is_number(token: &str) -> bool {
    parse_number(token).is_some()
}

/// Returns `true` if `token` is exactly one of `+ - * /`.
#[must_use]
pub fn is_operator(token: &str) -> bool {
    BinaryOperator::from_symbol(token).is_some()
}

/// Precedence of a textual token: 2 for `* /`, 1 for `+ -`, 0 for anything
/// else, including `(`.
#[must_use]
pub fn precedence(token: &str) -> u8 {
    BinaryOperator::from_symbol(token).map_or(0, BinaryOperator::precedence)
}
