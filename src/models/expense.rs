//! Expense model
//!
//! A single recorded spending event. Expenses are created by the storage layer,
//! which assigns the identifier and the creation timestamp.

use chrono::{DateTime, Datelike, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique, sequentially assigned identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Optional category; an empty string in the file reads back as `None`
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_category"
    )]
    pub category: Option<String>,

    /// When the expense was recorded
    pub date: DateTime<FixedOffset>,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        id: ExpenseId,
        description: impl Into<String>,
        amount: Money,
        category: Option<String>,
        date: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            category: category.filter(|c| !c.is_empty()),
            date,
        }
    }

    /// The category name, or an empty string when uncategorized
    pub fn category_name(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    /// Check if the expense was recorded in the given calendar month
    pub fn is_in_month(&self, month: u32, year: i32) -> bool {
        self.date.month() == month && self.date.year() == year
    }

    /// The calendar date of the expense as `YYYY-MM-DD`
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.id,
            self.date_string(),
            self.description,
            self.amount
        )
    }
}

fn deserialize_category<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|c| !c.is_empty()))
}
