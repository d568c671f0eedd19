//! Expense repository for JSON storage
//!
//! Every operation loads the whole `expenses.json` document, and every write
//! rewrites it in full. A readers-writer lock spans each operation: reads hold
//! the shared guard while parsing, writes hold the exclusive guard for the full
//! load-modify-save cycle.

use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, Money};

use super::file_io::{read_json, write_json_atomic};
use super::{next_id, ExpenseRepository};

/// On-disk document layout
#[derive(Debug, Default, Deserialize)]
struct ExpenseData {
    #[serde(default)]
    expenses: Vec<Expense>,
}

#[derive(Serialize)]
struct ExpenseDataRef<'a> {
    expenses: &'a [Expense],
}

/// Repository that persists expenses in a single JSON file
pub struct JsonFileRepository {
    path: PathBuf,
    lock: RwLock<()>,
}

impl JsonFileRepository {
    /// Open the repository, creating an empty document if the file is missing
    pub fn new(path: impl Into<PathBuf>) -> ExpenseResult<Self> {
        let path = path.into();

        if !path.exists() {
            info!("Creating empty expense file at {}", path.display());
            write_json_atomic(&path, &ExpenseDataRef { expenses: &[] })?;
        }

        Ok(Self {
            path,
            lock: RwLock::new(()),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_guard(&self) -> ExpenseResult<RwLockReadGuard<'_, ()>> {
        self.lock
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_guard(&self) -> ExpenseResult<RwLockWriteGuard<'_, ()>> {
        self.lock
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Caller must hold either guard
    fn load(&self) -> ExpenseResult<Vec<Expense>> {
        let data: ExpenseData = read_json(&self.path)?;
        trace!(
            "Loaded {} expenses from {}",
            data.expenses.len(),
            self.path.display()
        );
        Ok(data.expenses)
    }

    /// Caller must hold the write guard
    fn save(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        write_json_atomic(&self.path, &ExpenseDataRef { expenses })?;
        debug!(
            "Saved {} expenses to {}",
            expenses.len(),
            self.path.display()
        );
        Ok(())
    }
}

impl ExpenseRepository for JsonFileRepository {
    fn add(
        &self,
        description: &str,
        amount: Money,
        category: Option<&str>,
    ) -> ExpenseResult<ExpenseId> {
        let _guard = self.write_guard()?;
        let mut expenses = self.load()?;

        let id = next_id(&expenses);
        expenses.push(Expense::new(
            id,
            description,
            amount,
            category.map(String::from),
            Local::now().fixed_offset(),
        ));

        self.save(&expenses)?;
        info!(%id, %amount, "Added expense");
        Ok(id)
    }

    fn get_by_id(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        let _guard = self.read_guard()?;
        self.load()?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))
    }

    fn get_all(&self) -> ExpenseResult<Vec<Expense>> {
        let _guard = self.read_guard()?;
        self.load()
    }

    fn delete(&self, id: ExpenseId) -> ExpenseResult<()> {
        let _guard = self.write_guard()?;
        let mut expenses = self.load()?;

        let index = expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;
        expenses.remove(index);

        self.save(&expenses)?;
        info!(%id, "Deleted expense");
        Ok(())
    }
}
