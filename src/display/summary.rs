//! Summary and budget display formatting

use crate::models::ExpenseSummary;
use crate::services::BudgetStatus;

/// Format an expense summary with its per-category breakdown
pub fn format_summary(summary: &ExpenseSummary) -> String {
    let mut output = match summary.month_name() {
        Some(month) => format!("Total expenses for {}: {}\n", month, summary.total_amount),
        None => format!("Total expenses: {}\n", summary.total_amount),
    };
    output.push_str(&format!("Number of expenses: {}\n", summary.expense_count));

    if !summary.category_totals.is_empty() {
        output.push_str("\nBy category:\n");
        for (category, total) in &summary.category_totals {
            output.push_str(&format!("  {:24} {:>12}\n", category, total.to_string()));
        }
    }

    output
}

/// Format the result of a budget check
pub fn format_budget_status(status: &BudgetStatus) -> String {
    let mut output = String::new();
    output.push_str(&format!("Budget:    {}\n", status.budget.amount));
    output.push_str(&format!("Spent:     {}\n", status.spent));
    output.push_str(&format!("Remaining: {}\n", status.remaining));

    if status.exceeded {
        output.push_str(&format!(
            "Warning: You've exceeded your budget by {}\n",
            status.remaining.abs()
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Money};

    #[test]
    fn test_format_summary() {
        let mut summary = ExpenseSummary {
            total_amount: Money::parse("1203.50").unwrap(),
            expense_count: 2,
            ..ExpenseSummary::default()
        };
        summary
            .category_totals
            .insert("Food".into(), Money::from_cents(350));

        let output = format_summary(&summary);
        assert!(output.starts_with("Total expenses: $1203.50\n"));
        assert!(output.contains("Number of expenses: 2"));
        assert!(output.contains("Food"));
        assert!(output.contains("$3.50"));
    }

    #[test]
    fn test_format_monthly_summary() {
        let summary = ExpenseSummary::default().for_month(6, 2024);
        let output = format_summary(&summary);
        assert!(output.starts_with("Total expenses for June: $0.00"));
        assert!(!output.contains("By category"));
    }

    #[test]
    fn test_format_exceeded_budget() {
        let status = BudgetStatus {
            budget: Budget::new(6, 2024, Money::from_cents(50000)),
            spent: Money::from_cents(60000),
            remaining: Money::from_cents(-10000),
            exceeded: true,
        };

        let output = format_budget_status(&status);
        assert!(output.contains("Remaining: -$100.00"));
        assert!(output.contains("exceeded your budget by $100.00"));
    }
}
