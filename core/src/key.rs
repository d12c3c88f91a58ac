//! Structural keys: deterministic scalar identities for composite values.
//!
//! The containers in this crate use value identity, not reference identity:
//! two coordinates `(3, 4)` are the same element no matter where they were
//! allocated. That identity is a [`HashKey`], a totally ordered scalar
//! produced by a key function.
//!
//! The default key function, [`structural_key`], serializes the value to
//! canonical JSON and uses the text itself as the key. This is exact (no
//! collision class beyond true equality) but proportional to the size of the
//! value; for deep states, [`digest_key`] folds the canonical bytes through
//! domain-separated SHA-256 instead. Performance-sensitive callers can skip
//! serialization entirely by supplying their own key closure at container
//! construction (e.g. packing a 2-D coordinate into one integer).
//!
//! Invariant: `key(a) == key(b)` exactly when the container should treat
//! `a` and `b` as equal. A key function that maps distinct logical values to
//! one key corrupts container semantics; that is a caller bug, not a
//! recoverable condition.

use std::rc::Rc;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::canon::{canonical_json_bytes, CanonError};

/// Domain prefix for digest-form structural keys.
pub const DOMAIN_STRUCTURAL_KEY: &[u8] = b"CAIRN::STRUCTURAL_KEY::V1\0";

/// A totally ordered, equality-comparable container key.
///
/// `Int` is for cheap custom keys (packed coordinates, small enums);
/// `Str` is for canonical-text and digest keys. The two arms never compare
/// equal to each other, so a container may mix them only if its key function
/// is consistent about which arm a given value produces.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HashKey {
    Int(i64),
    Str(String),
}

impl From<i64> for HashKey {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<String> for HashKey {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for HashKey {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl std::fmt::Display for HashKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Str(v) => write!(f, "{v}"),
        }
    }
}

/// Failure to produce a structural key for a value.
///
/// Propagated unmodified through every container operation that needs a key;
/// nothing downstream attempts recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// `serde` could not represent the value as a JSON tree.
    Unserializable { detail: String },
    /// The JSON tree could not be canonicalized (non-integer number).
    NonCanonical(CanonError),
}

impl std::fmt::Display for KeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unserializable { detail } => {
                write!(f, "value not serializable for structural key: {detail}")
            }
            Self::NonCanonical(e) => write!(f, "value not canonicalizable: {e}"),
        }
    }
}

impl std::error::Error for KeyError {}

impl From<CanonError> for KeyError {
    fn from(e: CanonError) -> Self {
        Self::NonCanonical(e)
    }
}

/// A shared, fallible key function, as stored by the containers.
///
/// `Rc` so that cloning a container shares the strategy rather than
/// requiring the closure itself to be `Clone`. Single-threaded by contract,
/// so `Rc` is sufficient.
pub type KeyFn<T> = Rc<dyn Fn(&T) -> Result<HashKey, KeyError>>;

/// The default structural key: canonical JSON text of the value.
///
/// Deterministic field order comes from canonical JSON (object keys sorted),
/// so two structurally equal values always produce the same key.
///
/// # Errors
///
/// Returns [`KeyError::Unserializable`] if `value` has no JSON
/// representation, or [`KeyError::NonCanonical`] if it contains a
/// non-integer number.
pub fn structural_key<T: Serialize>(value: &T) -> Result<HashKey, KeyError> {
    let tree = serde_json::to_value(value).map_err(|e| KeyError::Unserializable {
        detail: e.to_string(),
    })?;
    let bytes = canonical_json_bytes(&tree)?;
    // canonical_json_bytes only emits valid UTF-8.
    Ok(HashKey::Str(String::from_utf8_lossy(&bytes).into_owned()))
}

/// Digest form of the structural key: `"sha256:<hex>"` over the canonical
/// bytes, with domain separation.
///
/// Constant-size regardless of value depth. Trades the exactness of
/// [`structural_key`] for a fixed footprint; the collision probability of
/// SHA-256 is treated as negligible for in-memory state spaces.
///
/// # Errors
///
/// Same conditions as [`structural_key`].
pub fn digest_key<T: Serialize>(value: &T) -> Result<HashKey, KeyError> {
    let tree = serde_json::to_value(value).map_err(|e| KeyError::Unserializable {
        detail: e.to_string(),
    })?;
    let bytes = canonical_json_bytes(&tree)?;
    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_STRUCTURAL_KEY);
    hasher.update(&bytes);
    let digest = hasher.finalize();
    Ok(HashKey::Str(format!("sha256:{}", hex::encode(digest))))
}
