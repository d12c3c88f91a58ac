//! Shared helpers for the cairn benchmark suites.

use cairn_harness::worlds::grid_route::GridRoute;

/// Deterministic weight grid: reproducible across runs and machines so
/// regressions are comparable. Weights are 1..=9 like the reference grids.
#[must_use]
pub fn synthetic_grid(side: usize, seed: u64) -> Vec<Vec<u32>> {
    let mut state = seed.max(1);
    (0..side)
        .map(|_| {
            (0..side)
                .map(|_| {
                    state = state
                        .wrapping_mul(6_364_136_223_846_793_005)
                        .wrapping_add(1_442_695_040_888_963_407);
                    #[allow(clippy::cast_possible_truncation)]
                    let weight = ((state >> 33) % 9 + 1) as u32;
                    weight
                })
                .collect()
        })
        .collect()
}

/// A routing world over a synthetic grid with the short-run rule.
#[must_use]
pub fn synthetic_route(side: usize, seed: u64) -> GridRoute {
    GridRoute::new(synthetic_grid(side, seed), 1, 3)
}
