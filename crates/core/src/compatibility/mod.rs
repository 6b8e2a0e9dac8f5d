//! Compatibility checking.
//!
//! Finding types, the ordered rule set, and the evaluator that folds rule
//! output into a verdict. Everything here is pure; callers resolve catalog
//! records before evaluating.

pub mod evaluator;
pub mod finding;
pub mod messages;
pub mod rules;
