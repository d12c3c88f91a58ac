//! Memoization properties: transparency against a brute-force oracle, and
//! the at-most-one-call-per-distinct-argument guarantee.

use std::cell::Cell;
use std::rc::Rc;

use cairn_core::memo::{MemoCache, Memoized};
use cairn_harness::worlds::arrangement::{count_arrangements, Record, Spring};

/// Oracle: enumerate every assignment of the unknowns and check the audit
/// directly. Exponential, so only usable on short rows.
fn brute_force_count(record: &Record) -> u64 {
    let unknowns: Vec<usize> = record
        .springs
        .iter()
        .enumerate()
        .filter(|(_, s)| **s == Spring::Unknown)
        .map(|(i, _)| i)
        .collect();
    assert!(unknowns.len() <= 16, "oracle is exponential");

    let mut count = 0;
    for mask in 0..(1_u64 << unknowns.len()) {
        let mut springs = record.springs.clone();
        for (bit, &index) in unknowns.iter().enumerate() {
            springs[index] = if mask & (1 << bit) == 0 {
                Spring::Operational
            } else {
                Spring::Damaged
            };
        }
        if damaged_runs(&springs) == record.runs {
            count += 1;
        }
    }
    count
}

fn damaged_runs(springs: &[Spring]) -> Vec<usize> {
    let mut runs = Vec::new();
    let mut current = 0;
    for s in springs {
        if *s == Spring::Damaged {
            current += 1;
        } else if current > 0 {
            runs.push(current);
            current = 0;
        }
    }
    if current > 0 {
        runs.push(current);
    }
    runs
}

#[test]
fn memoized_count_matches_brute_force() {
    let rows = [
        "???.### 1,1,3",
        ".??..??...?##. 1,1,3",
        "?#?#?#?#?#?#?#? 1,3,1,6",
        "????.#...#... 4,1,1",
        "????.######..#####. 1,6,5",
        "?###???????? 3,2,1",
        "? 1",
        ". 1",
        "#?#? 2,1",
    ];
    for line in rows {
        let record = Record::parse(line);
        assert_eq!(
            count_arrangements(&record).unwrap(),
            brute_force_count(&record),
            "{line}"
        );
    }
}

#[test]
fn wrapped_function_is_observationally_identical() {
    let collatz_steps = |n: &u64| {
        let mut n = *n;
        let mut steps = 0_u64;
        while n != 1 {
            n = if n % 2 == 0 { n / 2 } else { 3 * n + 1 };
            steps += 1;
        }
        steps
    };
    let mut wrapped = Memoized::new(collatz_steps);
    for n in [1_u64, 6, 27, 6, 97, 27, 1] {
        assert_eq!(wrapped.call(&n).unwrap(), collatz_steps(&n), "n = {n}");
    }
}

#[test]
fn underlying_function_runs_at_most_once_per_distinct_argument() {
    let invocations = Rc::new(Cell::new(0_u64));
    let counter = Rc::clone(&invocations);
    let mut wrapped = Memoized::new(move |pair: &(u32, u32)| {
        counter.set(counter.get() + 1);
        pair.0 + pair.1
    });

    let calls = [(1, 2), (3, 4), (1, 2), (1, 2), (3, 4), (5, 6)];
    for args in calls {
        assert_eq!(wrapped.call(&args).unwrap(), args.0 + args.1);
    }
    assert_eq!(invocations.get(), 3, "three distinct argument tuples");
}

#[test]
fn recursive_cache_reaches_intractable_sizes() {
    // 54 uncertain cells: ~2^54 naive branches, fine through the cache.
    let big = Record::parse("?????????? 1,2,3").unfold(5);
    let mut cache = MemoCache::new();
    let count =
        cairn_harness::worlds::arrangement::count_arrangements_with(&mut cache, &big).unwrap();
    assert!(count > 0);
    assert!(
        cache.misses() < 10_000,
        "state-space exploration, not branch enumeration"
    );
}
