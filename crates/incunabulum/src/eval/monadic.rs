//! Monadic verb evaluation

use std::sync::Arc;

use crate::{EvalError, Kind, Valence, Value, Verb};

/// Apply the monadic reading of `verb` to `w`.
pub fn apply(verb: Verb, w: &Arc<Value>) -> Result<Arc<Value>, EvalError> {
    match verb {
        Verb::Plus => Ok(identity(w)),
        Verb::Brace => Ok(Arc::new(size(w))),
        Verb::Tilde => iota(w).map(Arc::new),
        Verb::Less => Ok(Arc::new(box_value(w))),
        Verb::Hash => Ok(Arc::new(shape(w))),
        Verb::Comma => Err(EvalError::Unimplemented {
            verb,
            valence: Valence::Monadic,
        }),
    }
}

/// Identity (`+w`): the operand itself.
pub fn identity(w: &Arc<Value>) -> Arc<Value> {
    Arc::clone(w)
}

/// Size (`{w`): length of the first axis, or 1 for a scalar.
///
/// Only the first axis counts; `{` of a 2×3 matrix is 2.
pub fn size(w: &Value) -> Value {
    let n = w.shape().first().copied().unwrap_or(1);
    Value::scalar(n as i64)
}

/// Iota (`~n`): the vector `0 1 ... n-1`.
///
/// # Errors
///
/// `n` must be a non-negative plain scalar.
pub fn iota(w: &Value) -> Result<Value, EvalError> {
    let n = plain_scalar(Verb::Tilde, w)?;
    if n < 0 {
        return Err(EvalError::NegativeLength {
            verb: Verb::Tilde,
            value: n,
        });
    }
    Ok(Value::vector((0..n).collect()))
}

/// Box (`<w`): a rank-0 value holding `w`.
pub fn box_value(w: &Arc<Value>) -> Value {
    Value::boxed(Arc::clone(w))
}

/// Shape (`#w`): the shape as a vector; empty for a scalar.
pub fn shape(w: &Value) -> Value {
    Value::vector(w.shape().iter().map(|&len| len as i64).collect())
}

/// The number in a rank-0 plain operand.
pub(crate) fn plain_scalar(verb: Verb, v: &Value) -> Result<i64, EvalError> {
    if v.is_boxed() {
        return Err(EvalError::KindMismatch {
            verb,
            expected: Kind::Plain,
            got: Kind::Boxed,
        });
    }
    v.as_scalar().ok_or(EvalError::RankMismatch {
        verb,
        expected: "rank 0",
        got: v.rank(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared(v: Value) -> Arc<Value> {
        Arc::new(v)
    }

    #[test]
    fn test_identity_returns_same_value() {
        let w = shared(Value::vector(vec![1, 2]));
        let result = apply(Verb::Plus, &w).unwrap();
        assert!(Arc::ptr_eq(&w, &result));
    }

    #[test]
    fn test_size() {
        assert_eq!(size(&Value::scalar(7)), Value::scalar(1));
        assert_eq!(size(&Value::vector(vec![4, 5, 6])), Value::scalar(3));
        assert_eq!(
            size(&Value::plain(vec![2, 3], (0..6).collect())),
            Value::scalar(2)
        );
    }

    #[test]
    fn test_iota() {
        assert_eq!(iota(&Value::scalar(4)).unwrap(), Value::vector(vec![0, 1, 2, 3]));
        assert_eq!(iota(&Value::scalar(0)).unwrap(), Value::vector(vec![]));
    }

    #[test]
    fn test_iota_rejects_vector() {
        let result = iota(&Value::vector(vec![3]));
        assert!(matches!(
            result,
            Err(EvalError::RankMismatch { got: 1, .. })
        ));
    }

    #[test]
    fn test_iota_rejects_box() {
        let result = iota(&Value::boxed(Value::scalar(3)));
        assert!(matches!(result, Err(EvalError::KindMismatch { .. })));
    }

    #[test]
    fn test_box_shares_inner() {
        let w = shared(Value::vector(vec![1, 2, 3]));
        let boxed = box_value(&w);
        assert_eq!(boxed.rank(), 0);
        assert!(Arc::ptr_eq(boxed.unbox().unwrap(), &w));
    }

    #[test]
    fn test_shape() {
        assert_eq!(shape(&Value::scalar(5)), Value::vector(vec![]));
        assert_eq!(
            shape(&Value::plain(vec![2, 3, 4], vec![0; 24])),
            Value::vector(vec![2, 3, 4])
        );
        assert_eq!(shape(&Value::boxed(Value::scalar(1))), Value::vector(vec![]));
    }

    #[test]
    fn test_monadic_comma_unimplemented() {
        let w = shared(Value::scalar(1));
        assert_eq!(
            apply(Verb::Comma, &w),
            Err(EvalError::Unimplemented {
                verb: Verb::Comma,
                valence: Valence::Monadic
            })
        );
    }
}
