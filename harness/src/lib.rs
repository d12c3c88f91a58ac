//! Cairn Harness: representative consumers of the search core.
//!
//! The core crates expose generic primitives and know nothing about any
//! particular problem; these worlds supply the other side of that contract
//! (a state shape, an expansion function, a goal or termination rule, and
//! a key discipline) and anchor the workspace's integration tests and
//! benchmarks with realistic usage.
//!
//! The harness does NOT extend the search machinery; it only consumes
//! `cairn_core` and `cairn_search` through their public APIs.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod worlds;
