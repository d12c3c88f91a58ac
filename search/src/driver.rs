//! Best-first (uniform-cost) search over an implicitly generated graph.
//!
//! The driver combines a [`PriorityHeap`] frontier with a visited set of
//! structural keys. Duplicate frontier entries for one state are allowed to
//! coexist at different costs and are resolved lazily: a dequeued entry
//! whose state is already visited is discarded on the spot. This keeps
//! insertion at O(log n) with no decrease-key operation; the cost is that
//! stale, dominated entries sit in the heap until dequeued. The
//! `stale_discarded` counter makes that tradeoff observable.
//!
//! Correctness: with non-negative incremental costs (enforced by `u64`) and
//! a min-ordered frontier, the first time a state is dequeued unvisited its
//! accumulated cost is minimal, so a goal test on freshly visited states
//! yields the optimal goal cost.

use std::collections::BTreeSet;

use cairn_core::key::HashKey;

use crate::contract::SearchWorld;
use crate::error::SearchError;
use crate::heap::PriorityHeap;

/// How a search run ended. Both arms are ordinary outcomes; see
/// [`SearchError`] for actual failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<S> {
    /// A goal state was dequeued; `cost` is the minimal accumulated cost
    /// from the start state.
    Goal {
        state: S,
        cost: u64,
        stats: SearchStats,
    },
    /// The frontier drained without satisfying the goal predicate.
    Unreachable { stats: SearchStats },
}

impl<S> SearchOutcome<S> {
    /// The goal cost, if a goal was reached.
    #[must_use]
    pub fn cost(&self) -> Option<u64> {
        match self {
            Self::Goal { cost, .. } => Some(*cost),
            Self::Unreachable { .. } => None,
        }
    }

    /// Run counters, regardless of how the search ended.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        match self {
            Self::Goal { stats, .. } | Self::Unreachable { stats } => stats,
        }
    }
}

/// Counters describing a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States dequeued, found unvisited, and expanded.
    pub expanded: u64,
    /// Frontier entries pushed (including entries later found stale).
    pub enqueued: u64,
    /// Dequeued entries discarded because their state was already visited.
    pub stale_discarded: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
}

/// A frontier entry: a state, its accumulated cost, and a monotonic
/// insertion order for deterministic tie-breaking among equal costs
/// (oldest first).
struct FrontierEntry<S> {
    state: S,
    cost: u64,
    order: u64,
}

/// Run best-first search from `start` at cost 0.
///
/// Returns the minimal goal cost as [`SearchOutcome::Goal`], or
/// [`SearchOutcome::Unreachable`] if the goal predicate is never satisfied.
/// The search runs to goal or exhaustion; callers needing bounded time wrap
/// the world's `expand` with their own cap.
///
/// # Errors
///
/// Returns [`SearchError::MalformedStateKey`] if any encountered state
/// cannot be keyed.
pub fn best_first_search<W: SearchWorld>(
    world: &W,
    start: W::State,
) -> Result<SearchOutcome<W::State>, SearchError> {
    best_first_search_with_cost(world, start, 0)
}

/// [`best_first_search`] with a caller-supplied initial accumulated cost.
///
/// # Errors
///
/// Returns [`SearchError::MalformedStateKey`] if any encountered state
/// cannot be keyed.
pub fn best_first_search_with_cost<W: SearchWorld>(
    world: &W,
    start: W::State,
    initial_cost: u64,
) -> Result<SearchOutcome<W::State>, SearchError> {
    let mut frontier = PriorityHeap::new(|a: &FrontierEntry<W::State>, b: &FrontierEntry<W::State>| {
        (a.cost, a.order) < (b.cost, b.order)
    });
    let mut visited: BTreeSet<HashKey> = BTreeSet::new();
    let mut stats = SearchStats::default();
    let mut next_order: u64 = 0;

    frontier.enqueue(FrontierEntry {
        state: start,
        cost: initial_cost,
        order: next_order,
    });
    next_order += 1;
    stats.enqueued += 1;
    stats.frontier_high_water = 1;

    while let Some(entry) = frontier.dequeue() {
        let key = world.state_key(&entry.state)?;
        if !visited.insert(key) {
            // Lazy deletion: a cheaper entry for this state was already
            // finalized; this one is stale.
            stats.stale_discarded += 1;
            continue;
        }

        if world.is_goal(&entry.state) {
            return Ok(SearchOutcome::Goal {
                state: entry.state,
                cost: entry.cost,
                stats,
            });
        }

        stats.expanded += 1;
        for (next_state, step_cost) in world.expand(&entry.state) {
            let next_key = world.state_key(&next_state)?;
            if visited.contains(&next_key) {
                continue;
            }
            frontier.enqueue(FrontierEntry {
                state: next_state,
                cost: entry.cost.saturating_add(step_cost),
                order: next_order,
            });
            next_order += 1;
            stats.enqueued += 1;
            let size = frontier.len() as u64;
            if size > stats.frontier_high_water {
                stats.frontier_high_water = size;
            }
        }
    }

    Ok(SearchOutcome::Unreachable { stats })
}
