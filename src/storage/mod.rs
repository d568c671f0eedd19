//! Storage layer for the expense tracker
//!
//! Expenses live behind the [`ExpenseRepository`] trait so the service layer
//! never depends on a concrete backend. [`JsonFileRepository`] keeps the whole
//! collection in one pretty-printed JSON document; [`MemoryRepository`] keeps
//! it in process memory. Monthly budgets are held in a [`BudgetStore`].
//!
//! Locking is per repository instance. Two processes pointed at the same file
//! are not coordinated with each other.

pub mod budget;
pub mod expenses;
pub mod file_io;
pub mod memory;

pub use budget::BudgetStore;
pub use expenses::JsonFileRepository;
pub use file_io::{read_json, write_json_atomic};
pub use memory::MemoryRepository;

use crate::error::ExpenseResult;
use crate::models::{Expense, ExpenseId, ExpenseSummary, Money};

/// Persistence contract for the expense collection
///
/// Implementations keep expenses in insertion order and assign identifiers as
/// one more than the largest identifier present (1 for an empty collection).
pub trait ExpenseRepository: Send + Sync {
    /// Store a new expense stamped with the current time and return its id
    fn add(
        &self,
        description: &str,
        amount: Money,
        category: Option<&str>,
    ) -> ExpenseResult<ExpenseId>;

    /// Look up a single expense
    fn get_by_id(&self, id: ExpenseId) -> ExpenseResult<Expense>;

    /// All expenses in storage order
    fn get_all(&self) -> ExpenseResult<Vec<Expense>>;

    /// Remove an expense, failing with not-found if it does not exist
    fn delete(&self, id: ExpenseId) -> ExpenseResult<()>;

    /// Expenses recorded in the given calendar month
    fn get_by_month(&self, month: u32, year: i32) -> ExpenseResult<Vec<Expense>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|e| e.is_in_month(month, year))
            .collect())
    }

    /// Summary over every stored expense
    fn get_summary(&self) -> ExpenseResult<ExpenseSummary> {
        ExpenseSummary::from_expenses(&self.get_all()?)
    }

    /// Summary over the expenses of one calendar month
    fn get_monthly_summary(&self, month: u32, year: i32) -> ExpenseResult<ExpenseSummary> {
        let expenses = self.get_by_month(month, year)?;
        Ok(ExpenseSummary::from_expenses(&expenses)?.for_month(month, year))
    }
}

/// Identifier for the next expense appended to `expenses`
pub(crate) fn next_id(expenses: &[Expense]) -> ExpenseId {
    expenses
        .iter()
        .map(|e| e.id)
        .max()
        .map_or(ExpenseId::FIRST, ExpenseId::next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_next_id() {
        assert_eq!(next_id(&[]), ExpenseId::FIRST);

        let date = DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z").unwrap();
        let expenses = vec![
            Expense::new(ExpenseId::new(4), "a", Money::from_cents(1), None, date),
            Expense::new(ExpenseId::new(2), "b", Money::from_cents(1), None, date),
        ];
        assert_eq!(next_id(&expenses), ExpenseId::new(5));
    }

    #[test]
    fn test_repository_shared_across_threads() {
        let repo: Arc<dyn ExpenseRepository> = Arc::new(MemoryRepository::new());
        let worker = Arc::clone(&repo);

        thread::spawn(move || worker.add("Coffee", Money::from_cents(350), None))
            .join()
            .unwrap()
            .unwrap();
        assert_eq!(repo.get_all().unwrap().len(), 1);
    }
}
