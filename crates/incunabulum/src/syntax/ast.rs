//! Expression tree

use std::fmt;

use super::Verb;

/// A parsed expression.
///
/// Verb applications are right-recursive: the right operand of a monad or
/// dyad is always a complete expression, so `3+4+5` is `3+(4+5)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A single-digit literal
    Noun(u8),

    /// A variable reference, `a`..=`z`
    Var(char),

    /// A parenthesized expression
    Group(Box<Expr>),

    /// `verb right`
    Monad {
        /// The verb applied
        verb: Verb,
        /// Its operand
        right: Box<Expr>,
    },

    /// `left verb right`
    Dyad {
        /// The verb applied
        verb: Verb,
        /// The left operand (a noun, variable or group)
        left: Box<Expr>,
        /// The right operand
        right: Box<Expr>,
    },

    /// `name = value`
    Assign {
        /// The variable written
        name: char,
        /// The expression stored
        value: Box<Expr>,
    },
}

impl Expr {
    /// Create a monadic application
    pub fn monad(verb: Verb, right: Expr) -> Self {
        Expr::Monad {
            verb,
            right: Box::new(right),
        }
    }

    /// Create a dyadic application
    pub fn dyad(verb: Verb, left: Expr, right: Expr) -> Self {
        Expr::Dyad {
            verb,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Create an assignment
    pub fn assign(name: char, value: Expr) -> Self {
        Expr::Assign {
            name,
            value: Box::new(value),
        }
    }

    /// Create a parenthesized group
    pub fn group(inner: Expr) -> Self {
        Expr::Group(Box::new(inner))
    }
}

/// Writes the expression back as source text without whitespace.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Noun(d) => write!(f, "{}", d),
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Group(inner) => write!(f, "({})", inner),
            Expr::Monad { verb, right } => write!(f, "{}{}", verb, right),
            Expr::Dyad { verb, left, right } => write!(f, "{}{}{}", left, verb, right),
            Expr::Assign { name, value } => write!(f, "{}={}", name, value),
        }
    }
}
