//! CSV Export functionality
//!
//! Writes every expense as one CSV row with the columns
//! `ID,Date,Description,Amount,Category`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::services::ExpenseService;
use crate::storage::ExpenseRepository;

/// Column headers, always written first
pub const CSV_HEADER: [&str; 5] = ["ID", "Date", "Description", "Amount", "Category"];

/// Service for exporting expenses
pub struct ExportService<'a, R> {
    expenses: &'a ExpenseService<R>,
}

impl<'a, R: ExpenseRepository> ExportService<'a, R> {
    /// Create a new export service
    pub fn new(expenses: &'a ExpenseService<R>) -> Self {
        Self { expenses }
    }

    /// Write all expenses as CSV, returning the number of data rows
    pub fn write_csv<W: Write>(&self, writer: W) -> ExpenseResult<usize> {
        let expenses = self.expenses.get_all_expenses()?;
        write_rows(&expenses, writer)
    }

    /// Export all expenses to a CSV file, returning the number of data rows
    ///
    /// Expenses are loaded before the file is created, so a storage failure
    /// never leaves an empty export behind.
    pub fn export_to_file<P: AsRef<Path>>(&self, path: P) -> ExpenseResult<usize> {
        let path = path.as_ref();
        let expenses = self.expenses.get_all_expenses()?;

        let file = File::create(path).map_err(|e| {
            ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        let count = write_rows(&expenses, BufWriter::new(file))?;
        info!(count, "Exported expenses to {}", path.display());
        Ok(count)
    }
}

fn write_rows<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| ExpenseError::Export(format!("Failed to write header: {}", e)))?;

    for expense in expenses {
        csv_writer
            .write_record([
                expense.id.to_string(),
                expense.date_string(),
                expense.description.clone(),
                expense.amount.to_fixed(),
                expense.category_name().to_string(),
            ])
            .map_err(|e| {
                ExpenseError::Export(format!("Failed to write expense {}: {}", expense.id, e))
            })?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(format!("Failed to flush CSV output: {}", e)))?;

    Ok(expenses.len())
}
