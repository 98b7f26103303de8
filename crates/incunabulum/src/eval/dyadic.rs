//! Dyadic verb evaluation

use std::sync::Arc;

use crate::value::{product, MAX_RANK};
use crate::{EvalError, Kind, Valence, Value, Verb};

use super::monadic::plain_scalar;

/// Apply the dyadic reading of `verb` to `a` (left) and `w` (right).
pub fn apply(verb: Verb, a: &Value, w: &Value) -> Result<Arc<Value>, EvalError> {
    let result = match verb {
        Verb::Plus => plus(a, w)?,
        Verb::Brace => from(a, w)?,
        Verb::Hash => reshape(a, w)?,
        Verb::Comma => catenate(a, w)?,
        Verb::Tilde | Verb::Less => {
            return Err(EvalError::Unimplemented {
                verb,
                valence: Valence::Dyadic,
            })
        }
    };
    Ok(Arc::new(result))
}

/// Plus (`a+w`): element-wise sum of two equally shaped plain arrays.
///
/// # Errors
///
/// Shapes must match exactly; nothing is broadcast or padded.
pub fn plus(a: &Value, w: &Value) -> Result<Value, EvalError> {
    let (xs, ys) = (plain(Verb::Plus, a)?, plain(Verb::Plus, w)?);
    if a.shape() != w.shape() {
        return Err(EvalError::ShapeMismatch {
            verb: Verb::Plus,
            left: a.shape().to_vec(),
            right: w.shape().to_vec(),
        });
    }
    let sums = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| x.checked_add(*y))
        .collect::<Option<Vec<_>>>()
        .ok_or(EvalError::IntegerOverflow { verb: Verb::Plus })?;
    Ok(Value::plain(a.shape().to_vec(), sums))
}

/// From (`i{w`): the `i`-th cell of `w` along its first axis.
///
/// The result has `w`'s shape minus the first axis and keeps `w`'s kind.
pub fn from(a: &Value, w: &Value) -> Result<Value, EvalError> {
    let index = plain_scalar(Verb::Brace, a)?;
    let (&len, rest) = w.shape().split_first().ok_or(EvalError::RankMismatch {
        verb: Verb::Brace,
        expected: "rank 1 or more",
        got: 0,
    })?;
    let i = usize::try_from(index)
        .ok()
        .filter(|&i| i < len)
        .ok_or(EvalError::IndexOutOfBounds { index, len })?;

    let cell = product(rest);
    let data = w
        .data()
        .block(i * cell, cell)
        .ok_or(EvalError::IndexOutOfBounds { index, len })?;
    Ok(Value::new(rest.to_vec(), data))
}

/// Reshape (`a#w`): `w`'s elements, read cyclically, laid out in shape `a`.
///
/// A scalar `a` gives a vector of that length. A short source is tiled and a
/// long one truncated.
pub fn reshape(a: &Value, w: &Value) -> Result<Value, EvalError> {
    let shape = plain(Verb::Hash, a)?
        .iter()
        .map(|&n| {
            usize::try_from(n).map_err(|_| EvalError::NegativeLength {
                verb: Verb::Hash,
                value: n,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if shape.len() > MAX_RANK {
        return Err(EvalError::RankTooHigh {
            rank: shape.len(),
            max: MAX_RANK,
        });
    }

    let count = shape
        .iter()
        .try_fold(1usize, |acc, &n| acc.checked_mul(n))
        .ok_or(EvalError::IntegerOverflow { verb: Verb::Hash })?;
    let data = w.data().cycle_take(count).ok_or(EvalError::EmptySource)?;
    Ok(Value::new(shape, data))
}

/// Catenate (`a,w`): both operands' elements, flattened, as one vector.
///
/// # Errors
///
/// Plain and boxed elements cannot be mixed.
pub fn catenate(a: &Value, w: &Value) -> Result<Value, EvalError> {
    let data = a.data().concat(w.data()).ok_or(EvalError::KindMismatch {
        verb: Verb::Comma,
        expected: w.kind(),
        got: a.kind(),
    })?;
    Ok(Value::new(vec![data.len()], data))
}

fn plain(verb: Verb, v: &Value) -> Result<&[i64], EvalError> {
    v.as_plain().ok_or(EvalError::KindMismatch {
        verb,
        expected: Kind::Plain,
        got: Kind::Boxed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> Value {
        Value::plain(vec![2, 3], (0..6).collect())
    }

    #[test]
    fn test_plus_vectors() {
        let a = Value::vector(vec![1, 2, 3]);
        let w = Value::vector(vec![4, 5, 6]);
        assert_eq!(plus(&a, &w).unwrap(), Value::vector(vec![5, 7, 9]));
    }

    #[test]
    fn test_plus_keeps_shape() {
        let m = matrix();
        let sum = plus(&m, &m).unwrap();
        assert_eq!(sum.shape(), &[2, 3]);
        assert_eq!(sum.as_plain().unwrap(), &[0, 2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_plus_shape_mismatch() {
        let result = plus(&Value::scalar(1), &Value::vector(vec![1, 2]));
        assert_eq!(
            result,
            Err(EvalError::ShapeMismatch {
                verb: Verb::Plus,
                left: vec![],
                right: vec![2],
            })
        );
    }

    #[test]
    fn test_plus_overflow() {
        let result = plus(&Value::scalar(i64::MAX), &Value::scalar(1));
        assert_eq!(result, Err(EvalError::IntegerOverflow { verb: Verb::Plus }));
    }

    #[test]
    fn test_from_rows() {
        let m = matrix();
        assert_eq!(
            from(&Value::scalar(0), &m).unwrap(),
            Value::vector(vec![0, 1, 2])
        );
        assert_eq!(
            from(&Value::scalar(1), &m).unwrap(),
            Value::vector(vec![3, 4, 5])
        );
    }

    #[test]
    fn test_from_vector_gives_scalar() {
        let v = Value::vector(vec![7, 8, 9]);
        assert_eq!(from(&Value::scalar(2), &v).unwrap(), Value::scalar(9));
    }

    #[test]
    fn test_from_out_of_bounds() {
        let result = from(&Value::scalar(2), &matrix());
        assert_eq!(result, Err(EvalError::IndexOutOfBounds { index: 2, len: 2 }));
    }

    #[test]
    fn test_from_scalar_right() {
        let result = from(&Value::scalar(0), &Value::scalar(5));
        assert!(matches!(result, Err(EvalError::RankMismatch { got: 0, .. })));
    }

    #[test]
    fn test_reshape_tiles() {
        let result = reshape(&Value::vector(vec![2, 3]), &Value::vector(vec![0, 1])).unwrap();
        assert_eq!(result, Value::plain(vec![2, 3], vec![0, 1, 0, 1, 0, 1]));
    }

    #[test]
    fn test_reshape_truncates() {
        let result = reshape(&Value::scalar(2), &Value::vector(vec![4, 5, 6])).unwrap();
        assert_eq!(result, Value::vector(vec![4, 5]));
    }

    #[test]
    fn test_reshape_scalar_source() {
        let result = reshape(&Value::scalar(3), &Value::scalar(7)).unwrap();
        assert_eq!(result, Value::vector(vec![7, 7, 7]));
    }

    #[test]
    fn test_reshape_boxes() {
        let result = reshape(&Value::scalar(2), &Value::boxed(Value::scalar(5))).unwrap();
        assert_eq!(result.shape(), &[2]);
        assert!(result.is_boxed());
    }

    #[test]
    fn test_reshape_errors() {
        let empty = Value::vector(vec![]);
        assert_eq!(
            reshape(&Value::scalar(2), &empty),
            Err(EvalError::EmptySource)
        );
        assert_eq!(
            reshape(&Value::scalar(0), &empty).unwrap(),
            Value::vector(vec![])
        );
        assert_eq!(
            reshape(&Value::vector(vec![1, 1, 1, 1]), &Value::scalar(0)),
            Err(EvalError::RankTooHigh { rank: 4, max: 3 })
        );
        assert_eq!(
            reshape(&Value::scalar(-1), &Value::scalar(0)),
            Err(EvalError::NegativeLength {
                verb: Verb::Hash,
                value: -1
            })
        );
    }

    #[test]
    fn test_catenate_flattens() {
        let result = catenate(&matrix(), &Value::scalar(9)).unwrap();
        assert_eq!(result, Value::vector(vec![0, 1, 2, 3, 4, 5, 9]));
    }

    #[test]
    fn test_catenate_kind_mismatch() {
        let result = catenate(&Value::scalar(1), &Value::boxed(Value::scalar(2)));
        assert_eq!(
            result,
            Err(EvalError::KindMismatch {
                verb: Verb::Comma,
                expected: Kind::Boxed,
                got: Kind::Plain,
            })
        );
    }

    #[test]
    fn test_unimplemented_dyads() {
        let one = Value::scalar(1);
        for verb in [Verb::Tilde, Verb::Less] {
            assert_eq!(
                apply(verb, &one, &one),
                Err(EvalError::Unimplemented {
                    verb,
                    valence: Valence::Dyadic
                })
            );
        }
    }
}
