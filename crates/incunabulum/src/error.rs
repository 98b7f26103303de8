//! Error types for parsing and evaluation

use thiserror::Error;

use crate::syntax::{Valence, Verb};
use crate::value::{Kind, Value};

/// Errors raised while turning a line of text into an [`Expr`](crate::Expr).
///
/// Every variant carries the byte offset into the line it refers to.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line ended where an operand was required
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEnd {
        /// Byte offset of the end of input
        offset: usize,
    },

    /// A character that cannot start or continue an expression here
    #[error("unexpected character '{found}' at offset {offset}")]
    UnexpectedChar {
        /// The offending character
        found: char,
        /// Byte offset of the character
        offset: usize,
    },

    /// A character in verb position that is not one of the five verbs
    #[error("unknown verb '{found}' at offset {offset}")]
    UnknownVerb {
        /// The offending character
        found: char,
        /// Byte offset of the character
        offset: usize,
    },

    /// A `(` without its matching `)`
    #[error("unclosed '(' opened at offset {offset}")]
    UnclosedGroup {
        /// Byte offset of the opening parenthesis
        offset: usize,
    },

    /// The left side of `=` is not a bare variable name
    #[error("left side of '=' at offset {offset} is not a variable")]
    InvalidAssignTarget {
        /// Byte offset of the `=`
        offset: usize,
    },

    /// Expression nesting exceeds the configured limit
    #[error("expression nested deeper than {max} levels at offset {offset}")]
    TooDeep {
        /// Configured maximum depth
        max: usize,
        /// Byte offset where the limit was hit
        offset: usize,
    },
}

/// Errors raised while evaluating an [`Expr`](crate::Expr).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A variable slot was read before anything was stored in it
    #[error("undefined variable: {name}")]
    UndefinedVariable {
        /// Variable name
        name: char,
    },

    /// A name outside `a`..=`z` was used as a variable
    #[error("invalid variable name: {name:?}")]
    InvalidVariable {
        /// The rejected name
        name: char,
    },

    /// Element-wise verb applied to operands of different shapes
    #[error("shape mismatch in '{verb}': {left:?} vs {right:?}")]
    ShapeMismatch {
        /// The verb being applied
        verb: Verb,
        /// Shape of the left operand
        left: Vec<usize>,
        /// Shape of the right operand
        right: Vec<usize>,
    },

    /// Operand holds boxes where numbers are required, or the reverse
    #[error("kind mismatch in '{verb}': expected {expected}, got {got}")]
    KindMismatch {
        /// The verb being applied
        verb: Verb,
        /// Kind the verb requires
        expected: Kind,
        /// Kind actually supplied
        got: Kind,
    },

    /// Operand has a rank the verb cannot accept
    #[error("rank mismatch in '{verb}': expected {expected}, got rank {got}")]
    RankMismatch {
        /// The verb being applied
        verb: Verb,
        /// Description of the accepted ranks
        expected: &'static str,
        /// Rank actually supplied
        got: usize,
    },

    /// From (`{`) index beyond the first axis
    #[error("index {index} out of bounds for axis of length {len}")]
    IndexOutOfBounds {
        /// Requested index
        index: i64,
        /// Length of the first axis
        len: usize,
    },

    /// A length or axis size was negative
    #[error("negative length {value} in '{verb}'")]
    NegativeLength {
        /// The verb being applied
        verb: Verb,
        /// The offending number
        value: i64,
    },

    /// Reshape asked for more axes than a value may have
    #[error("rank {rank} exceeds the maximum rank {max}")]
    RankTooHigh {
        /// Requested rank
        rank: usize,
        /// Maximum supported rank
        max: usize,
    },

    /// Reshape of an empty source into a non-empty shape
    #[error("cannot reshape an empty array into a non-empty shape")]
    EmptySource,

    /// Integer arithmetic overflowed
    #[error("integer overflow in '{verb}'")]
    IntegerOverflow {
        /// The verb being applied
        verb: Verb,
    },

    /// Verb form with no definition
    #[error("{valence} '{verb}' is not implemented")]
    Unimplemented {
        /// The verb being applied
        verb: Verb,
        /// Whether the monadic or dyadic reading was requested
        valence: Valence,
    },
}

/// Any failure while interpreting one line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpError {
    /// The line did not parse
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The line parsed but failed to evaluate
    #[error("{0}")]
    Eval(#[from] EvalError),
}

/// Result type alias for interpreter operations
pub type Result<T> = std::result::Result<T, InterpError>;

/// Get a human-readable description of a value's type, e.g. `plain rank-2`.
pub fn type_name(value: &Value) -> String {
    format!("{} rank-{}", value.kind(), value.rank())
}
