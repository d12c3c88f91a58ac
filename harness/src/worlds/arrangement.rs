//! Arrangement counting: how many ways can an uncertain spring row satisfy
//! its damage audit?
//!
//! A row is a sequence of springs, each operational, damaged, or unknown,
//! plus an audit listing the lengths of the consecutive damaged runs in
//! order. Counting assignments of the unknowns naively branches two ways per
//! unknown, `2^n` for `n` unknowns. Every subproblem is fully described by
//! a (suffix, remaining-runs) pair, so routing the recursion through a
//! [`MemoCache`] bounds the work by the number of distinct reachable
//! subproblems instead. Unfolded rows (the fivefold expansion) are
//! intractable without it.

use serde::Serialize;

use cairn_core::key::KeyError;
use cairn_core::memo::MemoCache;

/// One spring position in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Spring {
    Operational,
    Damaged,
    Unknown,
}

/// A spring row with its damaged-run audit.
///
/// This is the memoization argument tuple: the whole subproblem state, with
/// no hidden context. Derives `Serialize` so the default structural key
/// applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub springs: Vec<Spring>,
    pub runs: Vec<usize>,
}

impl Record {
    /// Parse `"springs audit"` notation, e.g. `"???.### 1,1,3"`.
    ///
    /// # Panics
    ///
    /// Panics on malformed notation; this is a fixture helper for tests and
    /// benches, not an input boundary.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let (springs_part, runs_part) = line
            .split_once(' ')
            .expect("record notation is 'springs audit'");
        let springs = springs_part
            .chars()
            .map(|c| match c {
                '.' => Spring::Operational,
                '#' => Spring::Damaged,
                '?' => Spring::Unknown,
                other => panic!("unrecognized spring: {other}"),
            })
            .collect();
        let runs = runs_part
            .split(',')
            .map(|n| n.parse().expect("audit entries are lengths"))
            .collect();
        Self { springs, runs }
    }

    /// The fivefold-style expansion: `copies` copies of the springs joined
    /// by `Unknown` separators, and the audit repeated to match.
    ///
    /// # Panics
    ///
    /// Panics if `copies` is zero.
    #[must_use]
    pub fn unfold(&self, copies: usize) -> Self {
        assert!(copies >= 1, "unfold needs at least one copy");
        let mut springs = Vec::with_capacity(self.springs.len() * copies + copies - 1);
        let mut runs = Vec::with_capacity(self.runs.len() * copies);
        for i in 0..copies {
            if i > 0 {
                springs.push(Spring::Unknown);
            }
            springs.extend_from_slice(&self.springs);
            runs.extend_from_slice(&self.runs);
        }
        Self { springs, runs }
    }
}

/// Count satisfying assignments of the unknowns in `record`.
///
/// # Errors
///
/// Propagates [`KeyError`] from the cache's structural keying.
pub fn count_arrangements(record: &Record) -> Result<u64, KeyError> {
    let mut cache = MemoCache::new();
    count_arrangements_with(&mut cache, record)
}

/// [`count_arrangements`] against a caller-owned cache, so the cache can be
/// reused across related rows or inspected afterwards.
///
/// # Errors
///
/// Propagates [`KeyError`] from the cache's structural keying.
pub fn count_arrangements_with(
    cache: &mut MemoCache<Record, u64>,
    record: &Record,
) -> Result<u64, KeyError> {
    cache.get_or_compute(record, |cache| {
        let Record { springs, runs } = record;

        if runs.is_empty() {
            // Only valid if no damaged spring remains unaccounted for.
            return Ok(u64::from(springs.iter().all(|s| *s != Spring::Damaged)));
        }
        if springs.is_empty() {
            // Runs remain but nothing can satisfy them.
            return Ok(0);
        }
        let run = runs[0];
        if springs.len() < run {
            return Ok(0);
        }

        match springs[0] {
            Spring::Operational => {
                // Nothing starts here; resume at the next possible start.
                let springs = springs
                    .iter()
                    .copied()
                    .skip_while(|s| *s == Spring::Operational)
                    .collect();
                count_arrangements_with(
                    cache,
                    &Record {
                        springs,
                        runs: runs.clone(),
                    },
                )
            }
            Spring::Damaged => {
                let run_possible = springs[..run].iter().all(|s| *s != Spring::Operational);
                let separated = springs.get(run) != Some(&Spring::Damaged);
                if run_possible && separated {
                    // Consume the run and its separator.
                    let next_start = (run + 1).min(springs.len());
                    count_arrangements_with(
                        cache,
                        &Record {
                            springs: springs[next_start..].to_vec(),
                            runs: runs[1..].to_vec(),
                        },
                    )
                } else {
                    Ok(0)
                }
            }
            Spring::Unknown => {
                // Branch: the unknown is damaged, or it is operational.
                let mut as_damaged = springs.clone();
                as_damaged[0] = Spring::Damaged;
                let damaged_count = count_arrangements_with(
                    cache,
                    &Record {
                        springs: as_damaged,
                        runs: runs.clone(),
                    },
                )?;
                let operational_count = count_arrangements_with(
                    cache,
                    &Record {
                        springs: springs[1..].to_vec(),
                        runs: runs.clone(),
                    },
                )?;
                Ok(damaged_count + operational_count)
            }
        }
    })
}
