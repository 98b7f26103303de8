//! Value representation for runtime arrays
//!
//! Every runtime value is an array: a shape (one length per axis) plus a flat,
//! row-major element buffer. Elements are either plain integers or boxes, and
//! a box shares ownership of another, independently shaped value.

mod display;
mod impls;

use std::fmt;
use std::sync::Arc;

/// Highest rank a value may have.
pub const MAX_RANK: usize = 3;

/// A rank-0..3 array of integers or boxes.
///
/// Values are immutable once built. Verbs always construct a fresh value and
/// never write through an operand, which is what makes sharing inner values
/// between boxes and variables safe.
///
/// # Example
///
/// ```
/// use incunabulum::Value;
///
/// let v = Value::vector(vec![5, 2]);
/// assert_eq!(v.rank(), 1);
/// assert_eq!(v.shape(), &[2]);
/// assert_eq!(v.count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    /// One length per axis; empty for a scalar
    shape: Vec<usize>,

    /// Row-major elements; always `product(shape)` long
    data: Data,
}

/// The element buffer of a [`Value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Data {
    /// Plain integers
    Plain(Vec<i64>),

    /// Boxes, each sharing ownership of an inner value
    Boxed(Vec<Arc<Value>>),
}

/// Whether a value holds numbers or boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Elements are integers
    Plain,

    /// Elements are boxed values
    Boxed,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Plain => write!(f, "plain"),
            Kind::Boxed => write!(f, "boxed"),
        }
    }
}

/// Number of elements described by a shape. The empty shape describes one.
pub fn product(shape: &[usize]) -> usize {
    shape.iter().product()
}
