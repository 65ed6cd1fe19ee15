//! Dataset provider for roster.
//!
//! Loads employee and job records from a local JSON store and maps them
//! into the rectangular datasets consumed by the tabular view engine.

pub mod columns;
pub mod store;
pub mod types;

pub use columns::{employee_columns, employee_rows, job_columns, job_rows};
pub use store::{DataStore, StoreError};
pub use types::{Directory, Employee, Job};
