//! Tabular view engine for roster.
//!
//! Owns sorting, free-text filtering, and per-column visibility state for
//! an in-memory rectangular dataset. The dataset itself is supplied by a
//! provider and never mutated here; every state transition recomputes a
//! derived set of row indices.

pub mod format;
pub mod types;
pub mod view;

pub use format::{MISSING, format_value};
pub use types::{Align, CellFormat, CellValue, ColumnSpec, Row, SortOrder};
pub use view::{Action, TableView, ViewState};
