//! PC build compatibility and aggregation engine.
//!
//! Given a build (one component per single slot, lists for RAM and storage)
//! the engine returns a price total, a power estimate and a compatibility
//! verdict. It performs no I/O and holds no state between calls.

pub mod build;
pub mod compatibility;
pub mod component;
pub mod config;
pub mod error;
pub mod power;
pub mod price;
pub mod spec;
pub mod tier;
pub mod types;

#[cfg(test)]
mod test_support;

pub use compatibility::evaluator::{evaluate, evaluate_with, Evaluation};
