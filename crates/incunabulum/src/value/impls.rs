//! Value constructors, accessors, element-buffer helpers and From traits

use std::sync::Arc;

use super::*;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Build a value from a shape and an element buffer.
    ///
    /// # Panics
    ///
    /// Panics if the buffer length is not the product of the shape, or the
    /// shape has more than [`MAX_RANK`] axes.
    pub fn new(shape: Vec<usize>, data: Data) -> Self {
        assert!(
            shape.len() <= MAX_RANK,
            "rank {} exceeds maximum {}",
            shape.len(),
            MAX_RANK
        );
        assert_eq!(
            product(&shape),
            data.len(),
            "element count does not match shape {:?}",
            shape
        );
        Value { shape, data }
    }

    /// Create a rank-0 plain value
    pub fn scalar(n: i64) -> Self {
        Value {
            shape: Vec::new(),
            data: Data::Plain(vec![n]),
        }
    }

    /// Create a rank-1 plain value
    pub fn vector(items: Vec<i64>) -> Self {
        Value {
            shape: vec![items.len()],
            data: Data::Plain(items),
        }
    }

    /// Create a plain value of the given shape
    pub fn plain(shape: Vec<usize>, items: Vec<i64>) -> Self {
        Value::new(shape, Data::Plain(items))
    }

    /// Wrap a value in a rank-0 box.
    ///
    /// Boxing a box adds a layer; nothing is flattened.
    pub fn boxed(inner: impl Into<Arc<Value>>) -> Self {
        Value {
            shape: Vec::new(),
            data: Data::Boxed(vec![inner.into()]),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Accessors
    // ═══════════════════════════════════════════════════════════════════

    /// Number of axes
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Length of each axis
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of elements (1 for a scalar)
    pub fn count(&self) -> usize {
        self.data.len()
    }

    /// Plain or boxed
    pub fn kind(&self) -> Kind {
        self.data.kind()
    }

    /// The element buffer
    pub fn data(&self) -> &Data {
        &self.data
    }

    /// Elements, if this value is plain
    pub fn as_plain(&self) -> Option<&[i64]> {
        match &self.data {
            Data::Plain(items) => Some(items),
            Data::Boxed(_) => None,
        }
    }

    /// Boxes, if this value is boxed
    pub fn as_boxed(&self) -> Option<&[Arc<Value>]> {
        match &self.data {
            Data::Boxed(items) => Some(items),
            Data::Plain(_) => None,
        }
    }

    /// The number held by a rank-0 plain value
    pub fn as_scalar(&self) -> Option<i64> {
        match (&self.data, self.rank()) {
            (Data::Plain(items), 0) => items.first().copied(),
            _ => None,
        }
    }

    /// The value inside a rank-0 box
    pub fn unbox(&self) -> Option<&Arc<Value>> {
        match (&self.data, self.rank()) {
            (Data::Boxed(items), 0) => items.first(),
            _ => None,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════

    /// Check if this is a rank-0 value
    pub fn is_scalar(&self) -> bool {
        self.shape.is_empty()
    }

    /// Check if the elements are boxes
    pub fn is_boxed(&self) -> bool {
        self.kind() == Kind::Boxed
    }
}

// ═══════════════════════════════════════════════════════════════════
// Element Buffer Helpers
// ═══════════════════════════════════════════════════════════════════

impl Data {
    /// Number of elements
    pub fn len(&self) -> usize {
        match self {
            Data::Plain(items) => items.len(),
            Data::Boxed(items) => items.len(),
        }
    }

    /// Check if the buffer holds no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Plain or boxed
    pub fn kind(&self) -> Kind {
        match self {
            Data::Plain(_) => Kind::Plain,
            Data::Boxed(_) => Kind::Boxed,
        }
    }

    /// `n` elements read cyclically from the start of this buffer.
    ///
    /// Returns `None` when elements are needed but the buffer is empty.
    pub fn cycle_take(&self, n: usize) -> Option<Data> {
        if n > 0 && self.is_empty() {
            return None;
        }
        Some(match self {
            Data::Plain(items) => Data::Plain(items.iter().copied().cycle().take(n).collect()),
            Data::Boxed(items) => Data::Boxed(items.iter().cloned().cycle().take(n).collect()),
        })
    }

    /// The contiguous block `start..start + len`. Returns `None` if out of range.
    pub fn block(&self, start: usize, len: usize) -> Option<Data> {
        let end = start.checked_add(len)?;
        match self {
            Data::Plain(items) => items.get(start..end).map(|s| Data::Plain(s.to_vec())),
            Data::Boxed(items) => items.get(start..end).map(|s| Data::Boxed(s.to_vec())),
        }
    }

    /// This buffer followed by `other`. Returns `None` if the kinds differ.
    pub fn concat(&self, other: &Data) -> Option<Data> {
        match (self, other) {
            (Data::Plain(a), Data::Plain(b)) => {
                Some(Data::Plain(a.iter().chain(b).copied().collect()))
            }
            (Data::Boxed(a), Data::Boxed(b)) => {
                Some(Data::Boxed(a.iter().chain(b).cloned().collect()))
            }
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Conversions
// ═══════════════════════════════════════════════════════════════════

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::scalar(n)
    }
}

impl From<Vec<i64>> for Value {
    fn from(items: Vec<i64>) -> Self {
        Value::vector(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_invariants() {
        let v = Value::scalar(7);
        assert_eq!(v.rank(), 0);
        assert!(v.shape().is_empty());
        assert_eq!(v.count(), 1);
        assert_eq!(v.as_scalar(), Some(7));
    }

    #[test]
    fn test_plain_matrix() {
        let v = Value::plain(vec![2, 3], (0..6).collect());
        assert_eq!(v.rank(), 2);
        assert_eq!(v.count(), 6);
        assert_eq!(v.as_scalar(), None);
    }

    #[test]
    #[should_panic(expected = "element count does not match shape")]
    fn test_new_rejects_bad_count() {
        Value::plain(vec![2, 2], vec![1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "exceeds maximum")]
    fn test_new_rejects_rank_four() {
        Value::plain(vec![1, 1, 1, 1], vec![0]);
    }

    #[test]
    fn test_boxed_nesting() {
        let inner = Value::vector(vec![1, 2]);
        let once = Value::boxed(inner.clone());
        let twice = Value::boxed(once.clone());
        assert_eq!(twice.rank(), 0);
        assert!(twice.is_boxed());
        assert_eq!(twice.unbox().map(|v| v.as_ref()), Some(&once));
        assert_eq!(once.unbox().map(|v| v.as_ref()), Some(&inner));
    }

    #[test]
    fn test_cycle_take() {
        let data = Data::Plain(vec![0, 1]);
        assert_eq!(
            data.cycle_take(5),
            Some(Data::Plain(vec![0, 1, 0, 1, 0]))
        );
        assert_eq!(data.cycle_take(1), Some(Data::Plain(vec![0])));
        assert_eq!(Data::Plain(vec![]).cycle_take(0), Some(Data::Plain(vec![])));
        assert_eq!(Data::Plain(vec![]).cycle_take(3), None);
    }

    #[test]
    fn test_block() {
        let data = Data::Plain((0..6).collect());
        assert_eq!(data.block(3, 3), Some(Data::Plain(vec![3, 4, 5])));
        assert_eq!(data.block(4, 3), None);
    }

    #[test]
    fn test_concat_kinds() {
        let a = Data::Plain(vec![5, 2]);
        let b = Data::Plain(vec![0, 1]);
        assert_eq!(a.concat(&b), Some(Data::Plain(vec![5, 2, 0, 1])));

        let boxed = Data::Boxed(vec![Arc::new(Value::scalar(1))]);
        assert_eq!(a.concat(&boxed), None);
    }
}
