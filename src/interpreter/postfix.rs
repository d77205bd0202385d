use std::{fmt, str::FromStr};

use crate::{
    error::RuntimeError,
    interpreter::operator::{BinaryOperator, parse_number},
};

/// One element of a postfix sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PostfixItem {
    /// A value to push.
    Operand(f64),
    /// An operator applied to the two most recent values.
    Operator(BinaryOperator),
}

impl fmt::Display for PostfixItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// An expression in postfix (Reverse Polish) order.
///
/// Items are stored in evaluation order. Parentheses cannot appear, so a
/// sequence built by the converter has its grouping fully resolved.
///
/// A `Postfix` can also be read from whitespace-separated text, where every
/// word must be a number or one of `+ - * /`:
///
/// ```
/// use shunt::interpreter::postfix::Postfix;
///
/// let postfix: Postfix = "3 5 2 4 - * +".parse().unwrap();
/// assert_eq!(postfix.len(), 7);
/// assert_eq!(postfix.to_string(), "3 5 2 4 - * +");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Postfix {
    items: Vec<PostfixItem>,
}

impl Postfix {
    /// Creates an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends an item at the end of the sequence.
    pub fn push(&mut self, item: PostfixItem) {
        self.items.push(item);
    }

    /// The items in evaluation order.
    #[must_use]
    pub fn items(&self) -> &[PostfixItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<PostfixItem> for Postfix {
    fn from_iter<I: IntoIterator<Item = PostfixItem>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Postfix {
    type IntoIter = std::slice::Iter<'a, PostfixItem>;
    type Item = &'a PostfixItem;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl FromStr for Postfix {
    type Err = RuntimeError;

    /// Reads whitespace-separated postfix text.
    ///
    /// Operators are checked before numbers so that a lone `+` or `-` is
    /// never taken for a signed literal.
    fn from_str(source: &str) -> Result<Self, Self::Err> {
        source.split_whitespace()
              .map(|word| {
                  if let Some(op) = BinaryOperator::from_symbol(word) {
                      Ok(PostfixItem::Operator(op))
                  } else {
                      parse_number(word).map(PostfixItem::Operand)
                                        .ok_or_else(|| RuntimeError::unrecognized_token(word))
                  }
              })
              .collect()
    }
}
