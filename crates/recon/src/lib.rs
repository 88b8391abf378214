//! `wrangle-recon` — Keyed two-table reconciliation.
//!
//! Pure engine crate: joins two parsed tables on a shared key column and
//! classifies every row as matched, mismatched, or present on one side
//! only. No IO dependencies; callers bring [`wrangle_table::Table`]s.

pub mod engine;
pub mod error;
pub mod model;

pub use engine::reconcile;
pub use error::{ReconError, Side};
pub use model::{FieldDiff, ReconEntry, ReconReport, ReconStatus};
