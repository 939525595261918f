//! src/motif.rs
//!
//! Top-level `motif` module: constraint parameters, sequence checks, and the
//! generator the form feeds.

pub mod builder;
pub mod checks;
pub mod constraints;

/// Re-exports
pub use builder::{MotifBuilder, MotifSet};
pub use constraints::{ConstraintSet, Constraints, ElementSizes};
