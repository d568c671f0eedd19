//! Expense display formatting
//!
//! Formats expenses as a register for terminal output.

use std::fmt::Write;

use crate::models::Expense;

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format an expense date, falling back to ISO format if `date_format` is invalid
pub fn format_date(expense: &Expense, date_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", expense.date.format(date_format)).is_err() {
        return expense.date.format(FALLBACK_DATE_FORMAT).to_string();
    }
    out
}

/// Format a single expense as a register row
pub fn format_expense_row(expense: &Expense, date_format: &str) -> String {
    format!(
        "{:>5}  {:10}  {:30}  {:>12}  {}",
        expense.id,
        format_date(expense, date_format),
        truncate(&expense.description, 30),
        expense.amount.to_string(),
        expense.category_name()
    )
}

/// Format a list of expenses as a register
pub fn format_expense_list(expenses: &[Expense], date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>5}  {:10}  {:30}  {:>12}  {}\n",
        "ID", "Date", "Description", "Amount", "Category"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, date_format));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum length, adding an ellipsis if needed
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
