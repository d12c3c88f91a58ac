//! Search world contract trait.

use cairn_core::key::{HashKey, KeyError};

/// The programmatic boundary between the search core and a consumer.
///
/// A world supplies the implicit graph: a state type, an expansion function
/// producing `(next_state, incremental_cost)` pairs, a goal predicate, and
/// the key discipline used to deduplicate states.
///
/// # Contract
///
/// - `expand` must be deterministic: same state, same transitions in the
///   same order.
/// - Incremental costs are `u64`; non-negativity is what makes the driver's
///   first goal dequeue optimal, so it is encoded in the type.
/// - `state_key` is required, not defaulted. Equal states must map to equal
///   keys; a key collision between distinct states silently corrupts the
///   visited set. Most worlds delegate to
///   [`cairn_core::key::structural_key`] in one line; worlds with hot or
///   deep states supply a cheap packed key instead, and worlds whose states
///   carry representation-only fields normalize them away here.
pub trait SearchWorld {
    /// The consumer-defined search state. Opaque to the driver.
    type State: Clone;

    /// All legal transitions out of `state`, with their incremental costs.
    fn expand(&self, state: &Self::State) -> Vec<(Self::State, u64)>;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// The deduplication key for `state`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError`] if the state cannot be keyed; the driver
    /// propagates this to its caller unmodified.
    fn state_key(&self, state: &Self::State) -> Result<HashKey, KeyError>;
}
