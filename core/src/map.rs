//! `ValueMap`: a key→value association over composite keys.
//!
//! Same structural-identity discipline as [`crate::set::ValueSet`]: entries
//! are keyed by a [`HashKey`] projection of the key value, and the map
//! stores the `(K, V)` pair so iteration can hand back the original keys.
//! Lookup on a missing key returns an absent signal, never a silent
//! insertion.

use std::collections::BTreeMap;
use std::rc::Rc;

use serde::Serialize;

use crate::key::{structural_key, HashKey, KeyError, KeyFn};

/// A value-semantics map with clone isolation.
///
/// Cloning yields an independent copy; mutations of either side are
/// invisible to the other. The key function is shared (pure by contract).
/// Single-threaded use is a precondition, as for all containers here.
#[derive(Clone)]
pub struct ValueMap<K, V> {
    entries: BTreeMap<HashKey, (K, V)>,
    key_fn: KeyFn<K>,
}

impl<K: Serialize + 'static, V> ValueMap<K, V> {
    /// A map keyed by the default structural key (canonical JSON text).
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            key_fn: Rc::new(|key: &K| structural_key(key)),
        }
    }
}

impl<K: Serialize + 'static, V> Default for ValueMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> ValueMap<K, V> {
    /// A map keyed by a caller-supplied (infallible) key closure.
    #[must_use]
    pub fn with_key_fn(key_fn: impl Fn(&K) -> HashKey + 'static) -> Self
    where
        K: 'static,
    {
        Self {
            entries: BTreeMap::new(),
            key_fn: Rc::new(move |key: &K| Ok(key_fn(key))),
        }
    }

    /// Associate `value` with `key`, returning the previously stored value
    /// for an equal key, if any.
    ///
    /// # Errors
    ///
    /// Propagates [`KeyError`] from the key function.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, KeyError> {
        let hash = (self.key_fn)(&key)?;
        Ok(self.entries.insert(hash, (key, value)).map(|(_, v)| v))
    }

    /// Look up the value for `key`. `None` signals absence; callers branch
    /// on it, and nothing is inserted.
    ///
    /// # Errors
    ///
    /// Propagates [`KeyError`] from the key function.
    pub fn get(&self, key: &K) -> Result<Option<&V>, KeyError> {
        let hash = (self.key_fn)(key)?;
        Ok(self.entries.get(&hash).map(|(_, v)| v))
    }

    /// Look up the value for `key`, falling back to a caller default.
    ///
    /// # Errors
    ///
    /// Propagates [`KeyError`] from the key function.
    pub fn get_or<'a>(&'a self, key: &K, default: &'a V) -> Result<&'a V, KeyError> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    /// Whether an entry with an equal key exists.
    ///
    /// # Errors
    ///
    /// Propagates [`KeyError`] from the key function.
    pub fn contains(&self, key: &K) -> Result<bool, KeyError> {
        let hash = (self.key_fn)(key)?;
        Ok(self.entries.contains_key(&hash))
    }

    /// Remove the entry for `key`, returning its value if one existed.
    ///
    /// # Errors
    ///
    /// Propagates [`KeyError`] from the key function.
    pub fn remove(&mut self, key: &K) -> Result<Option<V>, KeyError> {
        let hash = (self.key_fn)(key)?;
        Ok(self.entries.remove(&hash).map(|(_, v)| v))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries, keeping the key function.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate `(key, value)` pairs in deterministic key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.values().map(|(k, v)| (k, v))
    }

    /// Key projection of [`Self::iter`].
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.values().map(|(k, _)| k)
    }

    /// Value projection of [`Self::iter`].
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values().map(|(_, v)| v)
    }
}

impl<K: std::fmt::Debug, V: std::fmt::Debug> std::fmt::Debug for ValueMap<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.entries.values().map(|(k, v)| (k, v)))
            .finish()
    }
}
