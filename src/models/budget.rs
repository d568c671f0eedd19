//! Monthly budget model
//!
//! A spending ceiling for one calendar month of one year.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Key under which a budget is stored: (year, month)
pub type BudgetKey = (i32, u32);

/// A spending ceiling for a (year, month) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Calendar month, 1 through 12
    pub month: u32,

    pub year: i32,

    /// Ceiling for the month (always positive)
    pub amount: Money,
}

impl Budget {
    /// Create a new budget
    pub fn new(month: u32, year: i32, amount: Money) -> Self {
        Self {
            month,
            year,
            amount,
        }
    }

    /// The storage key of this budget
    pub fn key(&self) -> BudgetKey {
        (self.year, self.month)
    }

    /// Period label such as "2024-06"
    pub fn period_label(&self) -> String {
        period_label(self.month, self.year)
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} budget: {}", self.period_label(), self.amount)
    }
}

/// Format a month/year pair as "YYYY-MM"
pub fn period_label(month: u32, year: i32) -> String {
    format!("{:04}-{:02}", year, month)
}
