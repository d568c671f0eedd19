//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! validating input before any storage access and resolving defaults such as
//! the current year.

pub mod budget;
pub mod expense;

pub use budget::{BudgetService, BudgetStatus};
pub use expense::ExpenseService;

use chrono::{Datelike, Local};

use crate::error::{ExpenseError, ExpenseResult};

/// The current calendar year in local time
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Reject months outside 1..=12
pub(crate) fn validate_month(month: u32) -> ExpenseResult<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(ExpenseError::Validation(
            "month must be between 1 and 12".into(),
        ))
    }
}

/// Treat year 0 as "the current year"
pub(crate) fn resolve_year(year: i32) -> i32 {
    if year == 0 {
        current_year()
    } else {
        year
    }
}
