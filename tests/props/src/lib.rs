//! Shared fixtures for the cross-crate property suite.

#![forbid(unsafe_code)]

use cairn_core::key::{HashKey, KeyError};
use cairn_search::contract::SearchWorld;

/// The reference weighted digraph used by the search-correctness tests:
///
/// ```text
/// A →1→ B →1→ C →1→ D        E (isolated, no incoming edges)
///  \________4________↗ C
/// ```
///
/// Shortest A→D is 3 (A→B→C→D); the direct-ish A→C→D costs 5.
pub struct ReferenceGraph {
    pub goal: char,
}

impl ReferenceGraph {
    const EDGES: [(char, char, u64); 4] =
        [('A', 'B', 1), ('A', 'C', 4), ('B', 'C', 1), ('C', 'D', 1)];
}

impl SearchWorld for ReferenceGraph {
    type State = char;

    fn expand(&self, state: &char) -> Vec<(char, u64)> {
        Self::EDGES
            .iter()
            .filter(|(from, _, _)| from == state)
            .map(|(_, to, cost)| (*to, *cost))
            .collect()
    }

    fn is_goal(&self, state: &char) -> bool {
        *state == self.goal
    }

    fn state_key(&self, state: &char) -> Result<HashKey, KeyError> {
        Ok(HashKey::Str(state.to_string()))
    }
}

/// A small deterministic pseudo-random stream for order-insensitive
/// property tests. Plain LCG; quality is irrelevant, reproducibility is
/// the point.
pub struct SmallRng(u64);

impl SmallRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0
    }
}
