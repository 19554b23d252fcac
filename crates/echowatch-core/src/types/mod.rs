//! Shared data structures for drift analysis (no logic).

pub mod drift_result;
pub mod snapshot;

pub use drift_result::{DriftChanges, DriftResult, Significance};
pub use snapshot::{Comparison, Snapshot};
