//! Expense CLI commands
//!
//! Implements the `add`, `list`, `delete` and `summary` commands.

use clap::Args;

use crate::config::Settings;
use crate::display::{format_budget_status, format_expense_list, format_summary};
use crate::error::ExpenseResult;
use crate::models::{ExpenseId, Money};
use crate::services::{BudgetService, ExpenseService};
use crate::storage::ExpenseRepository;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Description of the expense
    #[arg(short, long)]
    pub description: String,

    /// Amount spent (e.g. "3.50")
    #[arg(short, long, allow_negative_numbers = true)]
    pub amount: Money,

    /// Category of the expense
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list expenses from this month (1-12) of the current year
    #[arg(short, long)]
    pub month: Option<u32>,
}

/// Arguments for `delete`
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// ID of the expense to delete
    #[arg(long)]
    pub id: ExpenseId,
}

/// Arguments for `summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Month to summarize (1-12) of the current year
    #[arg(short, long)]
    pub month: Option<u32>,
}

/// Handle the `add` command
pub fn handle_add_command<R: ExpenseRepository>(
    expenses: &ExpenseService<R>,
    args: AddArgs,
) -> ExpenseResult<()> {
    let id = expenses.add_expense(&args.description, args.amount, args.category.as_deref())?;
    println!("Expense added successfully (ID: {})", id);
    Ok(())
}

/// Handle the `list` command
pub fn handle_list_command<R: ExpenseRepository>(
    expenses: &ExpenseService<R>,
    settings: &Settings,
    args: ListArgs,
) -> ExpenseResult<()> {
    let list = match args.month {
        Some(month) => expenses.get_monthly_expenses(month)?,
        None => expenses.get_all_expenses()?,
    };

    print!("{}", format_expense_list(&list, &settings.date_format));
    Ok(())
}

/// Handle the `delete` command
pub fn handle_delete_command<R: ExpenseRepository>(
    expenses: &ExpenseService<R>,
    args: DeleteArgs,
) -> ExpenseResult<()> {
    expenses.delete_expense(args.id)?;
    println!("Expense deleted successfully (ID: {})", args.id);
    Ok(())
}

/// Handle the `summary` command
///
/// A monthly summary also shows the month's budget when one has been set.
pub fn handle_summary_command<R: ExpenseRepository>(
    expenses: &ExpenseService<R>,
    budgets: &BudgetService<'_, R>,
    args: SummaryArgs,
) -> ExpenseResult<()> {
    let Some(month) = args.month else {
        print!("{}", format_summary(&expenses.get_expense_summary()?));
        return Ok(());
    };

    let summary = expenses.get_monthly_summary(month)?;
    print!("{}", format_summary(&summary));

    match budgets.check_budget(month, 0) {
        Ok(status) => {
            println!();
            print!("{}", format_budget_status(&status));
        }
        Err(e) if e.is_not_found() => {}
        Err(e) => return Err(e),
    }

    Ok(())
}
