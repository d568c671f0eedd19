//! In-memory store for monthly budgets
//!
//! Budgets are not written to disk: a store is created when the process starts
//! and its contents are gone when it exits.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Budget, BudgetKey};

/// Budgets keyed by (year, month)
#[derive(Debug, Default)]
pub struct BudgetStore {
    budgets: RwLock<HashMap<BudgetKey, Budget>>,
}

impl BudgetStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a budget, replacing any budget for the same month
    pub fn upsert(&self, budget: Budget) -> ExpenseResult<Option<Budget>> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(budgets.insert(budget.key(), budget))
    }

    /// Get the budget for a month
    pub fn get(&self, month: u32, year: i32) -> ExpenseResult<Option<Budget>> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.get(&(year, month)).cloned())
    }

    /// All budgets ordered by year, then month
    pub fn get_all(&self) -> ExpenseResult<Vec<Budget>> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut all: Vec<_> = budgets.values().cloned().collect();
        all.sort_by_key(Budget::key);
        Ok(all)
    }
}
