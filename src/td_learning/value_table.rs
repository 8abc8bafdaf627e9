//! State-value table shared by the enumerator and every agent

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    error::{Error, Result},
    types::BoardKey,
};

/// Handle through which agents share one table.
///
/// Access is strictly sequential and single-threaded; games against the same
/// table must not run concurrently.
pub type SharedValueTable = Rc<RefCell<ValueTable>>;

/// Board key → estimated value of the position for `X`, in [0, 1].
///
/// Entries are inserted by the enumerator and afterwards only adjusted in
/// place. Lookups never insert: a missing key is reported, not defaulted.
#[derive(Debug, Clone, Default)]
pub struct ValueTable {
    values: HashMap<BoardKey, f64>,
}

impl ValueTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the table in a shareable handle
    pub fn into_shared(self) -> SharedValueTable {
        Rc::new(RefCell::new(self))
    }

    /// Value of a position, if present
    pub fn get(&self, key: &BoardKey) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Value of a position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingValue`] if the key was never inserted.
    pub fn value(&self, key: &BoardKey) -> Result<f64> {
        self.get(key).ok_or_else(|| Error::MissingValue {
            key: key.to_string(),
        })
    }

    /// Insert or overwrite a value, returning the previous one
    pub fn insert(&mut self, key: BoardKey, value: f64) -> Option<f64> {
        self.values.insert(key, value)
    }

    /// One-step backup pulling `before` toward `after`:
    ///
    /// V(before) ← V(before) + α (V(after) − V(before))
    ///
    /// Returns the updated value of `before`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingValue`] if either key is absent; the table is
    /// left unchanged in that case.
    pub fn backup(&mut self, before: &BoardKey, after: &BoardKey, learning_rate: f64) -> Result<f64> {
        let target = self.value(after)?;
        let current = self.values.get_mut(before).ok_or_else(|| Error::MissingValue {
            key: before.to_string(),
        })?;
        *current += learning_rate * (target - *current);
        Ok(*current)
    }

    pub fn contains(&self, key: &BoardKey) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BoardKey, f64)> {
        self.values.iter().map(|(key, &value)| (key, value))
    }
}
