//! Budget CLI commands
//!
//! Budgets are held in memory for the lifetime of the process, so `budget`
//! sets the ceiling and reports the check for that month in one go.

use clap::Args;

use crate::display::format_budget_status;
use crate::error::ExpenseResult;
use crate::models::Money;
use crate::services::BudgetService;
use crate::storage::ExpenseRepository;

/// Arguments for `budget`
#[derive(Args, Debug)]
pub struct BudgetArgs {
    /// Month to set the budget for (1-12)
    #[arg(short, long)]
    pub month: u32,

    /// Budget amount
    #[arg(short, long, allow_negative_numbers = true)]
    pub amount: Money,

    /// Year of the budget (defaults to the current year)
    #[arg(short, long, default_value_t = 0, hide_default_value = true)]
    pub year: i32,
}

/// Handle the `budget` command
pub fn handle_budget_command<R: ExpenseRepository>(
    budgets: &BudgetService<'_, R>,
    args: BudgetArgs,
) -> ExpenseResult<()> {
    let budget = budgets.set_budget(args.month, args.year, args.amount)?;
    println!("Budget of {} set for {}", budget.amount, budget.period_label());

    let status = budgets.check_budget(budget.month, budget.year)?;
    print!("{}", format_budget_status(&status));
    Ok(())
}
