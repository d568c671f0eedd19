//! In-memory expense repository
//!
//! Same contract as the JSON file backend without touching disk. Useful for
//! embedding and for seeding expenses at fixed dates.

use std::sync::RwLock;

use chrono::Local;
use tracing::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, Money};

use super::{next_id, ExpenseRepository};

/// Repository holding expenses in process memory
#[derive(Debug, Default)]
pub struct MemoryRepository {
    expenses: RwLock<Vec<Expense>>,
}

impl MemoryRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with expenses, kept in the given order
    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self {
            expenses: RwLock::new(expenses),
        }
    }
}

impl ExpenseRepository for MemoryRepository {
    fn add(
        &self,
        description: &str,
        amount: Money,
        category: Option<&str>,
    ) -> ExpenseResult<ExpenseId> {
        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let id = next_id(&expenses);
        expenses.push(Expense::new(
            id,
            description,
            amount,
            category.map(String::from),
            Local::now().fixed_offset(),
        ));

        info!(%id, %amount, "Added expense");
        Ok(id)
    }

    fn get_by_id(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        expenses
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))
    }

    fn get_all(&self) -> ExpenseResult<Vec<Expense>> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(expenses.clone())
    }

    fn delete(&self, id: ExpenseId) -> ExpenseResult<()> {
        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let index = expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;
        expenses.remove(index);

        info!(%id, "Deleted expense");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_add_and_get() {
        let repo = MemoryRepository::new();
        let id = repo.add("Coffee", Money::from_cents(350), Some("Food")).unwrap();
        assert_eq!(id, ExpenseId::FIRST);

        let expense = repo.get_by_id(id).unwrap();
        assert_eq!(expense.description, "Coffee");
    }

    #[test]
    fn test_seeded_ids_continue_from_max() {
        let date = DateTime::parse_from_rfc3339("2024-06-10T12:00:00Z").unwrap();
        let repo = MemoryRepository::with_expenses(vec![Expense::new(
            ExpenseId::new(10),
            "Old",
            Money::from_cents(100),
            None,
            date,
        )]);

        assert_eq!(
            repo.add("New", Money::from_cents(100), None).unwrap(),
            ExpenseId::new(11)
        );
        assert_eq!(repo.get_by_month(6, 2024).unwrap().len(), 1);
    }

    #[test]
    fn test_delete_then_get_is_not_found() {
        let repo = MemoryRepository::new();
        let id = repo.add("Coffee", Money::from_cents(350), None).unwrap();

        repo.delete(id).unwrap();
        assert!(repo.get_by_id(id).unwrap_err().is_not_found());
        assert!(repo.delete(id).unwrap_err().is_not_found());
    }
}
