//! `GridRoute`: minimum-cost routing across a weighted grid with a
//! straight-run constraint.
//!
//! The mover enters the grid at the top-left cell, exits at the bottom-right
//! cell, and pays the weight of every cell it enters. After each turn it
//! must travel at least `min_run` cells and at most `max_run` cells in a
//! straight line before turning again (90° turns only, no reversing).
//!
//! The constraint lives entirely in [`SearchWorld::expand`]: a state's
//! successors are the legal *end-of-run* positions on the perpendicular
//! axis, each carrying the summed weight of the cells crossed. The driver
//! never sees the rule; constrained variants of shortest-path are expressed
//! purely by shaping the expansion.
//!
//! # State identity
//!
//! A position is revisitable when arriving on a different axis, so identity
//! is `(x, y, axis)`. Arrival *direction* along the axis is deliberately
//! normalized away: a cell reached heading east and the same cell reached
//! heading west allow exactly the same next runs, so keeping them distinct
//! would only double the state space. The key is a packed integer, the
//! cheap-key strategy for hot search states.

use cairn_core::key::{HashKey, KeyError};
use cairn_search::contract::SearchWorld;
use cairn_search::driver::{best_first_search, SearchOutcome};
use cairn_search::error::SearchError;

/// Travel axis of the run that produced a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A routing state: position plus the axis of the run that reached it
/// (`None` only for the start, which may open on either axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteState {
    pub x: usize,
    pub y: usize,
    pub axis: Option<Axis>,
}

/// A weighted grid with straight-run bounds.
#[derive(Debug, Clone)]
pub struct GridRoute {
    weights: Vec<Vec<u32>>,
    width: usize,
    height: usize,
    min_run: usize,
    max_run: usize,
}

impl GridRoute {
    /// Build a routing world over `weights`.
    ///
    /// # Panics
    ///
    /// Panics if the grid is empty or ragged, or if
    /// `min_run` is zero or exceeds `max_run`.
    #[must_use]
    pub fn new(weights: Vec<Vec<u32>>, min_run: usize, max_run: usize) -> Self {
        let height = weights.len();
        assert!(height > 0, "grid must have at least one row");
        let width = weights[0].len();
        assert!(width > 0, "grid must have at least one column");
        assert!(
            weights.iter().all(|row| row.len() == width),
            "grid rows must all have the same width"
        );
        assert!(min_run >= 1, "min_run must be at least 1");
        assert!(min_run <= max_run, "min_run must not exceed max_run");
        Self {
            weights,
            width,
            height,
            min_run,
            max_run,
        }
    }

    /// The start state: top-left, no run axis committed yet.
    #[must_use]
    pub fn start(&self) -> RouteState {
        RouteState {
            x: 0,
            y: 0,
            axis: None,
        }
    }

    /// Minimum total weight of a legal route from entry to exit, or
    /// [`SearchOutcome::Unreachable`] if the run bounds forbid every route.
    ///
    /// # Errors
    ///
    /// Propagates [`SearchError`] from the driver. With the packed integer
    /// key this world cannot actually produce one.
    pub fn cheapest_route(&self) -> Result<SearchOutcome<RouteState>, SearchError> {
        best_first_search(self, self.start())
    }

    /// Step deltas for both directions along `axis`.
    fn directions(axis: Axis) -> [(isize, isize); 2] {
        match axis {
            Axis::Horizontal => [(1, 0), (-1, 0)],
            Axis::Vertical => [(0, 1), (0, -1)],
        }
    }

    /// Enumerate all end-of-run successors along `axis` from `(x, y)`.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn runs_along(&self, state: RouteState, axis: Axis, out: &mut Vec<(RouteState, u64)>) {
        for (dx, dy) in Self::directions(axis) {
            let mut x = state.x as isize;
            let mut y = state.y as isize;
            let mut run_cost: u64 = 0;
            for step in 1..=self.max_run {
                x += dx;
                y += dy;
                if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
                    break;
                }
                let (cx, cy) = (x as usize, y as usize);
                run_cost += u64::from(self.weights[cy][cx]);
                if step >= self.min_run {
                    out.push((
                        RouteState {
                            x: cx,
                            y: cy,
                            axis: Some(axis),
                        },
                        run_cost,
                    ));
                }
            }
        }
    }
}

impl SearchWorld for GridRoute {
    type State = RouteState;

    fn expand(&self, state: &RouteState) -> Vec<(RouteState, u64)> {
        let mut successors = Vec::new();
        match state.axis {
            // A committed run turns onto the perpendicular axis only.
            Some(Axis::Horizontal) => self.runs_along(*state, Axis::Vertical, &mut successors),
            Some(Axis::Vertical) => self.runs_along(*state, Axis::Horizontal, &mut successors),
            None => {
                self.runs_along(*state, Axis::Horizontal, &mut successors);
                self.runs_along(*state, Axis::Vertical, &mut successors);
            }
        }
        successors
    }

    fn is_goal(&self, state: &RouteState) -> bool {
        state.x == self.width - 1 && state.y == self.height - 1
    }

    #[allow(clippy::cast_possible_wrap)]
    fn state_key(&self, state: &RouteState) -> Result<HashKey, KeyError> {
        let axis_code = match state.axis {
            None => 0_i64,
            Some(Axis::Horizontal) => 1,
            Some(Axis::Vertical) => 2,
        };
        let cell = (state.y * self.width + state.x) as i64;
        Ok(HashKey::Int(cell * 3 + axis_code))
    }
}
