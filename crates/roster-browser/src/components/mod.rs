//! TUI components.

pub mod data_table;
pub mod footer;
pub mod header;
pub mod view_tabs;

pub use data_table::DataTable;
pub use footer::Footer;
pub use header::Header;
pub use view_tabs::ViewTabs;
