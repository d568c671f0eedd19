//! Export module for the expense tracker
//!
//! Renders the stored expenses as a spreadsheet-compatible CSV document.

pub mod csv;

pub use self::csv::{ExportService, CSV_HEADER};
