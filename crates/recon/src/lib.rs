//! `kenpo-recon` — Eligibility reconciliation engine.
//!
//! Pure engine crate: receives pre-parsed tables, returns submission records
//! or joined result rows. No CLI or IO dependencies.

pub mod classify;
pub mod compose;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod fields;
pub mod filter;
pub mod matcher;
pub mod model;
pub mod normalize;

pub use classify::{classify, FileOrder, Roles};
pub use compose::compose;
pub use config::CheckSettings;
pub use eligibility::transform;
pub use error::CheckError;
pub use fields::{ColumnIndex, LogicalField};
pub use model::{EligibilityRecord, JoinedRow, RawTable, ResultSheet};
