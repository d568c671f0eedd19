//! Budget service
//!
//! Sets and checks monthly spending ceilings. Budgets live in a [`BudgetStore`]
//! handed to the service at construction; spending comes from the
//! [`ExpenseService`].

use tracing::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{period_label, Budget, Money};
use crate::storage::{BudgetStore, ExpenseRepository};

use super::{resolve_year, validate_month, ExpenseService};

/// Spending measured against a budget
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub budget: Budget,
    /// Total spent in the budget's month
    pub spent: Money,
    /// Budget minus spending; negative when over budget
    pub remaining: Money,
    pub exceeded: bool,
}

/// Service for monthly budget management
pub struct BudgetService<'a, R> {
    expenses: &'a ExpenseService<R>,
    store: BudgetStore,
}

impl<'a, R: ExpenseRepository> BudgetService<'a, R> {
    /// Create a new budget service that owns `store`
    pub fn new(expenses: &'a ExpenseService<R>, store: BudgetStore) -> Self {
        Self { expenses, store }
    }

    /// Set (or replace) the budget for a month; year 0 means the current year
    pub fn set_budget(&self, month: u32, year: i32, amount: Money) -> ExpenseResult<Budget> {
        validate_month(month)?;
        if !amount.is_positive() {
            return Err(ExpenseError::Validation(
                "budget amount must be greater than zero".into(),
            ));
        }

        let budget = Budget::new(month, resolve_year(year), amount);
        self.store.upsert(budget.clone())?;
        info!(period = %budget.period_label(), %amount, "Budget set");
        Ok(budget)
    }

    /// Get the budget for a month; year 0 means the current year
    pub fn get_budget(&self, month: u32, year: i32) -> ExpenseResult<Budget> {
        validate_month(month)?;
        let year = resolve_year(year);

        self.store
            .get(month, year)?
            .ok_or_else(|| ExpenseError::budget_not_found(period_label(month, year)))
    }

    /// Compare a month's spending with its budget
    pub fn check_budget(&self, month: u32, year: i32) -> ExpenseResult<BudgetStatus> {
        let budget = self.get_budget(month, year)?;
        let summary = self.expenses.get_period_summary(budget.month, budget.year)?;

        let remaining = budget
            .amount
            .checked_sub(summary.total_amount)
            .ok_or_else(|| {
                ExpenseError::Overflow(format!("remaining budget for {}", budget.period_label()))
            })?;
        Ok(BudgetStatus {
            spent: summary.total_amount,
            exceeded: remaining.is_negative(),
            remaining,
            budget,
        })
    }

    /// Every budget set so far, ordered by period
    pub fn list_budgets(&self) -> ExpenseResult<Vec<Budget>> {
        self.store.get_all()
    }
}
