//! Submission flattening and cross-version response aggregation.
//!
//! # Responsibility
//! - Normalize one submission into a question-keyed view with provenance.
//! - Fold many submissions into one question-keyed multi-valued map.
//!
//! # Invariants
//! - Aggregation is independent of form version; `questionId` is the join key.
//! - Every call builds a fresh map; nothing accumulates across calls.

pub mod flatten;
pub mod responses;
