//! Memoization: route a pure computation through an argument-keyed cache.
//!
//! The cache turns a two-way-branching recursion into an exploration of the
//! distinct reachable subproblem states, the difference between `2^n` calls
//! and `n·m` cache entries. The wrapped computation must be pure: same
//! arguments, same result, no observable side effects. The cache cannot
//! detect impurity; that precondition is the caller's.
//!
//! There is no eviction. State spaces in this domain are finite and modest,
//! so the cache grows monotonically to the number of distinct argument
//! tuples ever seen; [`MemoCache::len`] exposes that growth for callers that
//! want an external bound.

use serde::Serialize;

use crate::key::{HashKey, KeyError};
use crate::map::ValueMap;

/// An argument-keyed result cache with re-entrant computation.
///
/// `get_or_compute` hands the cache back to the compute closure, so a
/// recursive algorithm can consult it at every level:
///
/// ```
/// use cairn_core::memo::MemoCache;
///
/// fn fib(cache: &mut MemoCache<u64, u64>, n: u64) -> Result<u64, cairn_core::key::KeyError> {
///     cache.get_or_compute(&n, |cache| {
///         if n < 2 {
///             return Ok(n);
///         }
///         Ok(fib(cache, n - 1)? + fib(cache, n - 2)?)
///     })
/// }
///
/// let mut cache = MemoCache::new();
/// assert_eq!(fib(&mut cache, 40).unwrap(), 102_334_155);
/// ```
pub struct MemoCache<A, R> {
    results: ValueMap<A, R>,
    hits: u64,
    misses: u64,
}

impl<A: Serialize + Clone + 'static, R: Clone> MemoCache<A, R> {
    /// A cache keyed by the default structural key of the argument tuple.
    #[must_use]
    pub fn new() -> Self {
        Self {
            results: ValueMap::new(),
            hits: 0,
            misses: 0,
        }
    }
}

impl<A: Serialize + Clone + 'static, R: Clone> Default for MemoCache<A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Clone, R: Clone> MemoCache<A, R> {
    /// A cache keyed by a caller-supplied argument key closure.
    #[must_use]
    pub fn with_key_fn(key_fn: impl Fn(&A) -> HashKey + 'static) -> Self
    where
        A: 'static,
    {
        Self {
            results: ValueMap::with_key_fn(key_fn),
            hits: 0,
            misses: 0,
        }
    }

    /// Return the cached result for `args`, or run `compute` and cache it.
    ///
    /// `compute` runs at most once per distinct argument key for the
    /// lifetime of the cache. It receives `&mut self` so recursive calls
    /// flow through the same cache. The subproblem state must be fully
    /// captured by `args`; a computation that reads hidden mutable context
    /// breaks the memoization soundness contract.
    ///
    /// # Errors
    ///
    /// Propagates [`KeyError`] from the argument key function, including
    /// from recursive `compute` calls.
    pub fn get_or_compute<F>(&mut self, args: &A, compute: F) -> Result<R, KeyError>
    where
        F: FnOnce(&mut Self) -> Result<R, KeyError>,
    {
        if let Some(found) = self.results.get(args)? {
            self.hits += 1;
            return Ok(found.clone());
        }
        self.misses += 1;
        let result = compute(self)?;
        self.results.insert(args.clone(), result.clone())?;
        Ok(result)
    }

    /// Number of distinct argument tuples computed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Lookups answered from the cache.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that ran the computation.
    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

/// A plain pure function packaged with its cache: a drop-in callable with
/// identical input/output behavior and cached performance.
pub struct Memoized<A, R, F>
where
    F: Fn(&A) -> R,
{
    cache: MemoCache<A, R>,
    func: F,
}

impl<A: Serialize + Clone + 'static, R: Clone, F: Fn(&A) -> R> Memoized<A, R, F> {
    /// Wrap `func` with a structurally keyed cache.
    #[must_use]
    pub fn new(func: F) -> Self {
        Self {
            cache: MemoCache::new(),
            func,
        }
    }
}

impl<A: Clone, R: Clone, F: Fn(&A) -> R> Memoized<A, R, F> {
    /// Wrap `func` with a custom argument key.
    #[must_use]
    pub fn with_key_fn(func: F, key_fn: impl Fn(&A) -> HashKey + 'static) -> Self
    where
        A: 'static,
    {
        Self {
            cache: MemoCache::with_key_fn(key_fn),
            func,
        }
    }

    /// Call the wrapped function through the cache.
    ///
    /// # Errors
    ///
    /// Propagates [`KeyError`] from the argument key function.
    pub fn call(&mut self, args: &A) -> Result<R, KeyError> {
        let func = &self.func;
        self.cache.get_or_compute(args, |_| Ok(func(args)))
    }

    /// The underlying cache, for inspecting growth and hit rates.
    #[must_use]
    pub fn cache(&self) -> &MemoCache<A, R> {
        &self.cache
    }
}
