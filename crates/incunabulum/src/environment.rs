//! The variable table: one slot per lowercase letter

use std::sync::Arc;

use crate::error::EvalError;
use crate::value::Value;

/// Number of variable slots, `a` through `z`.
pub const SLOT_COUNT: usize = 26;

/// The runtime environment holding the 26 variable slots.
///
/// Slots store shared references; reading a variable hands back the stored
/// value itself, not a copy. There is no scoping: a slot lives until it is
/// overwritten or the environment is cleared.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use incunabulum::{Environment, Value};
///
/// let mut env = Environment::new();
/// env.assign('x', Arc::new(Value::scalar(4))).unwrap();
///
/// assert_eq!(env.get('x').map(|v| v.as_ref()), Some(&Value::scalar(4)));
/// assert!(env.get('y').is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    slots: [Option<Arc<Value>>; SLOT_COUNT],
}

impl Environment {
    /// Create an environment with every slot empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot index for a variable name, if it is a lowercase ASCII letter.
    pub fn slot(name: char) -> Option<usize> {
        name.is_ascii_lowercase()
            .then(|| (name as u8 - b'a') as usize)
    }

    /// Look up the value stored under `name`.
    ///
    /// Returns `None` for empty slots and for names outside `a`..=`z`.
    pub fn get(&self, name: char) -> Option<&Arc<Value>> {
        Self::slot(name).and_then(|i| self.slots[i].as_ref())
    }

    /// Store `value` under `name`, replacing whatever was there.
    ///
    /// # Errors
    ///
    /// Returns `InvalidVariable` if `name` is not a lowercase ASCII letter.
    pub fn assign(&mut self, name: char, value: Arc<Value>) -> Result<(), EvalError> {
        let i = Self::slot(name).ok_or(EvalError::InvalidVariable { name })?;
        self.slots[i] = Some(value);
        Ok(())
    }

    /// Check if `name` currently holds a value.
    pub fn contains(&self, name: char) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over the filled slots in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &Arc<Value>)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|v| ((b'a' + i as u8) as char, v)))
    }

    /// Number of filled slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Check if every slot is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        self.slots = Default::default();
    }
}
