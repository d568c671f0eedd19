//! Expense Tracker - command-line personal expense tracking
//!
//! This library provides the core functionality of the `expense-tracker`
//! binary: recording expenses in a JSON file, summarizing them, checking
//! monthly budgets and exporting to CSV.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, summaries, budgets)
//! - `storage`: Repository trait with JSON file and in-memory backends
//! - `services`: Validation and business logic
//! - `export`: CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers used by the binary
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::models::Money;
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::JsonFileRepository;
//!
//! # fn main() -> expense_tracker::ExpenseResult<()> {
//! let repo = JsonFileRepository::new("data/expenses.json")?;
//! let expenses = ExpenseService::new(repo);
//! let id = expenses.add_expense("Coffee", Money::from_cents(350), Some("Food"))?;
//! println!("added expense {}", id);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
