//! Cairn Search: a generic best-first search driver and its priority queue.
//!
//! This crate provides the search layer over `cairn_core`'s structural-key
//! containers. Consumers supply an implicit graph through the
//! [`contract::SearchWorld`] trait; the driver owns the control loop.
//!
//! # Crate dependency graph
//!
//! ```text
//! cairn_core  ←  cairn_search  ←  cairn_harness
//! (keys, containers)  (heap, driver)   (consumer worlds)
//! ```
//!
//! # Key types
//!
//! - [`heap::PriorityHeap`] -- binary min-heap with a caller-supplied order
//! - [`contract::SearchWorld`] -- trait for consumers of the driver
//! - [`driver::best_first_search`] -- the uniform-cost control loop
//! - [`driver::SearchOutcome`] -- goal cost or a typed unreachable signal

#![forbid(unsafe_code)]

pub mod contract;
pub mod driver;
pub mod error;
pub mod heap;
