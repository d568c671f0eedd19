//! Expense service
//!
//! Validates expense input and delegates to whichever repository backend it
//! was constructed with.

use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, ExpenseSummary, Money};
use crate::storage::ExpenseRepository;

use super::{current_year, validate_month};

/// Service for expense management
pub struct ExpenseService<R> {
    repo: R,
}

impl<R: ExpenseRepository> ExpenseService<R> {
    /// Create a new expense service over a repository
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Record a new expense
    ///
    /// The description is trimmed and must not be empty; the amount must be
    /// greater than zero. An empty category is stored as no category.
    pub fn add_expense(
        &self,
        description: &str,
        amount: Money,
        category: Option<&str>,
    ) -> ExpenseResult<ExpenseId> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ExpenseError::Validation(
                "description cannot be empty".into(),
            ));
        }
        if !amount.is_positive() {
            return Err(ExpenseError::Validation(
                "amount must be greater than zero".into(),
            ));
        }

        let category = category.map(str::trim).filter(|c| !c.is_empty());
        debug!(description, ?category, "Adding expense");
        self.repo.add(description, amount, category)
    }

    /// List every expense in storage order
    pub fn get_all_expenses(&self) -> ExpenseResult<Vec<Expense>> {
        self.repo.get_all()
    }

    /// Get a single expense
    pub fn get_expense_by_id(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        validate_id(id)?;
        self.repo.get_by_id(id)
    }

    /// Delete an expense
    pub fn delete_expense(&self, id: ExpenseId) -> ExpenseResult<()> {
        validate_id(id)?;
        self.repo.delete(id)
    }

    /// Summary over all expenses
    pub fn get_expense_summary(&self) -> ExpenseResult<ExpenseSummary> {
        self.repo.get_summary()
    }

    /// Summary for a month of the current year
    pub fn get_monthly_summary(&self, month: u32) -> ExpenseResult<ExpenseSummary> {
        self.get_period_summary(month, current_year())
    }

    /// Summary for a month of an explicit year
    pub fn get_period_summary(&self, month: u32, year: i32) -> ExpenseResult<ExpenseSummary> {
        validate_month(month)?;
        self.repo.get_monthly_summary(month, year)
    }

    /// Expenses recorded in a month of the current year
    pub fn get_monthly_expenses(&self, month: u32) -> ExpenseResult<Vec<Expense>> {
        validate_month(month)?;
        self.repo.get_by_month(month, current_year())
    }
}

fn validate_id(id: ExpenseId) -> ExpenseResult<()> {
    if id.is_valid() {
        Ok(())
    } else {
        Err(ExpenseError::Validation("invalid expense ID".into()))
    }
}
