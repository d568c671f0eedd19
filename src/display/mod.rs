//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses, summaries and budget checks
//! for terminal display.

pub mod expense;
pub mod summary;

pub use expense::{format_expense_list, format_expense_row};
pub use summary::{format_budget_status, format_summary};
