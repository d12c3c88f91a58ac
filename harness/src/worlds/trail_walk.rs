//! `TrailMap`: longest simple trail through a weighted junction graph.
//!
//! Junctions are grid coordinates; trails between junctions carry their
//! walked length. The longest simple path (no junction revisited) is found
//! by depth-first exploration where each branch owns a clone of the
//! visited set, the branch-and-clone pattern that the containers' clone
//! isolation exists for. Longest-path has no optimal-substructure shortcut
//! on general graphs, so unlike [`super::grid_route`] this consumer is not
//! a best-first search: it must enumerate branches, and correctness depends
//! on one branch's visited mutations never leaking into a sibling.

use serde::Serialize;

use cairn_core::key::{HashKey, KeyError};
use cairn_core::map::ValueMap;
use cairn_core::set::ValueSet;

/// A junction in the trail network, named by grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Junction {
    pub x: i64,
    pub y: i64,
}

impl Junction {
    #[must_use]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Coordinate-pair key: `"x,y"` regardless of which instance carries it.
fn junction_key(j: &Junction) -> HashKey {
    HashKey::Str(format!("{},{}", j.x, j.y))
}

/// An undirected weighted junction graph.
pub struct TrailMap {
    trails: ValueMap<Junction, Vec<(Junction, u64)>>,
}

impl TrailMap {
    #[must_use]
    pub fn new() -> Self {
        Self {
            trails: ValueMap::with_key_fn(junction_key),
        }
    }

    /// Add a trail of `length` between `a` and `b` (both directions).
    ///
    /// # Errors
    ///
    /// Propagates [`KeyError`] from the junction key (infallible for the
    /// coordinate key, but the container contract surfaces it).
    pub fn link(&mut self, a: Junction, b: Junction, length: u64) -> Result<(), KeyError> {
        self.append(a, (b, length))?;
        self.append(b, (a, length))
    }

    fn append(&mut self, from: Junction, edge: (Junction, u64)) -> Result<(), KeyError> {
        let mut edges = self.trails.get(&from)?.cloned().unwrap_or_default();
        edges.push(edge);
        self.trails.insert(from, edges)?;
        Ok(())
    }

    /// Number of junctions with at least one trail.
    #[must_use]
    pub fn junction_count(&self) -> usize {
        self.trails.len()
    }

    /// Length of the longest simple trail from `start` to `end`, or `None`
    /// if `end` cannot be reached at all.
    ///
    /// # Errors
    ///
    /// Propagates [`KeyError`] from the visited-set key.
    pub fn longest_trail(&self, start: Junction, end: Junction) -> Result<Option<u64>, KeyError> {
        struct Branch {
            at: Junction,
            walked: u64,
            visited: ValueSet<Junction>,
        }

        let mut visited = ValueSet::with_key_fn(junction_key);
        visited.insert(start)?;
        let mut branches = vec![Branch {
            at: start,
            walked: 0,
            visited,
        }];
        let mut best: Option<u64> = None;
        let empty: Vec<(Junction, u64)> = Vec::new();

        while let Some(branch) = branches.pop() {
            if branch.at == end {
                best = Some(best.map_or(branch.walked, |b| b.max(branch.walked)));
                continue;
            }
            for (next, length) in self.trails.get_or(&branch.at, &empty)? {
                if branch.visited.contains(next)? {
                    continue;
                }
                // Each sibling gets its own visited copy; mutations must
                // not cross branch boundaries.
                let mut visited = branch.visited.clone();
                visited.insert(*next)?;
                branches.push(Branch {
                    at: *next,
                    walked: branch.walked + length,
                    visited,
                });
            }
        }

        Ok(best)
    }
}

impl Default for TrailMap {
    fn default() -> Self {
        Self::new()
    }
}
