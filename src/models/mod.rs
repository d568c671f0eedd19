//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain: expenses,
//! money amounts, summaries and monthly budgets.

pub mod budget;
pub mod expense;
pub mod ids;
pub mod money;
pub mod summary;

pub use budget::{period_label, Budget, BudgetKey};
pub use expense::Expense;
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use summary::ExpenseSummary;
