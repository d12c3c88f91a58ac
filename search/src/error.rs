//! Typed search errors.
//!
//! Exhaustion of the frontier is NOT an error: an unreachable goal is a
//! first-class [`crate::driver::SearchOutcome`]. The only failure the
//! driver can hit is a state that cannot be keyed, which propagates here.

use cairn_core::key::KeyError;

/// Typed failure for a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A world's `state_key` failed; the offending `KeyError` is carried
    /// unmodified.
    MalformedStateKey(KeyError),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedStateKey(e) => write!(f, "state could not be keyed: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedStateKey(e) => Some(e),
        }
    }
}

impl From<KeyError> for SearchError {
    fn from(e: KeyError) -> Self {
        Self::MalformedStateKey(e)
    }
}
