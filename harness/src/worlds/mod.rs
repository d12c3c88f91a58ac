//! Consumer worlds exercising the search and container core.
//!
//! Each world is a self-contained demonstration of one usage pattern:
//! constraint-shaped best-first expansion (`grid_route`), memoized
//! branch-and-combine recursion (`arrangement`), and branch-and-clone
//! exhaustive exploration (`trail_walk`).

pub mod arrangement;
pub mod grid_route;
pub mod trail_walk;
