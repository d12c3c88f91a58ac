//! `ValueSet`: a set over composite values, deduplicated by structural key.
//!
//! Backed by a `BTreeMap` keyed on [`HashKey`] so iteration order is
//! deterministic, the same discipline as a serialization-boundary visited
//! set. The map stores the canonical instance for each key, so membership
//! and removal work on structural equality, not on addresses.

use std::collections::BTreeMap;
use std::rc::Rc;

use serde::Serialize;

use crate::key::{structural_key, HashKey, KeyError, KeyFn};

/// A value-semantics set: at most one stored element per structural key.
///
/// Cloning produces a mutation-isolated copy (the branch-and-clone pattern:
/// an algorithm exploring several futures from a shared prefix clones the
/// set before diverging). The key function itself is shared between clones;
/// it is pure by contract, so sharing is unobservable.
///
/// Not safe for concurrent mutation from multiple threads; single-threaded
/// use is a precondition, not an enforced property.
#[derive(Clone)]
pub struct ValueSet<T> {
    entries: BTreeMap<HashKey, T>,
    key_fn: KeyFn<T>,
}

impl<T: Serialize + 'static> ValueSet<T> {
    /// A set keyed by the default structural key (canonical JSON text).
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            key_fn: Rc::new(|value: &T| structural_key(value)),
        }
    }
}

impl<T: Serialize + 'static> Default for ValueSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ValueSet<T> {
    /// A set keyed by a caller-supplied (infallible) key closure.
    ///
    /// The closure must be pure and must map values to equal keys exactly
    /// when the caller considers them equal.
    #[must_use]
    pub fn with_key_fn(key_fn: impl Fn(&T) -> HashKey + 'static) -> Self
    where
        T: 'static,
    {
        Self {
            entries: BTreeMap::new(),
            key_fn: Rc::new(move |value: &T| Ok(key_fn(value))),
        }
    }

    /// Insert `value`. Idempotent: returns `false` and keeps the previously
    /// stored instance if an equal value is already present.
    ///
    /// # Errors
    ///
    /// Propagates [`KeyError`] from the key function.
    pub fn insert(&mut self, value: T) -> Result<bool, KeyError> {
        let key = (self.key_fn)(&value)?;
        match self.entries.entry(key) {
            std::collections::btree_map::Entry::Occupied(_) => Ok(false),
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(true)
            }
        }
    }

    /// Whether an element equal to `value` is present.
    ///
    /// # Errors
    ///
    /// Propagates [`KeyError`] from the key function.
    pub fn contains(&self, value: &T) -> Result<bool, KeyError> {
        let key = (self.key_fn)(value)?;
        Ok(self.entries.contains_key(&key))
    }

    /// Remove the element equal to `value`, reporting whether one existed.
    ///
    /// # Errors
    ///
    /// Propagates [`KeyError`] from the key function.
    pub fn remove(&mut self, value: &T) -> Result<bool, KeyError> {
        let key = (self.key_fn)(value)?;
        Ok(self.entries.remove(&key).is_some())
    }

    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all elements, keeping the key function.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate the stored canonical elements (deterministic key order).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }
}

impl<T: Clone> ValueSet<T> {
    /// Elements present in both `self` and `other`.
    ///
    /// Both sets must use the same key discipline; entries are matched by
    /// stored key, so no key function runs here.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let entries = self
            .entries
            .iter()
            .filter(|(key, _)| other.entries.contains_key(*key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Self {
            entries,
            key_fn: Rc::clone(&self.key_fn),
        }
    }

    /// Elements present in either set. On key overlap, `self`'s instance
    /// wins (insert idempotence, extended across sets).
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut entries = self.entries.clone();
        for (key, value) in &other.entries {
            entries
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
        Self {
            entries,
            key_fn: Rc::clone(&self.key_fn),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ValueSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.entries.values()).finish()
    }
}
