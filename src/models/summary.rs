//! Expense summary
//!
//! A derived aggregate over a set of expenses. Summaries are never persisted.

use std::collections::BTreeMap;

use chrono::Month;
use serde::Serialize;

use super::expense::Expense;
use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// Totals over a set of expenses, optionally scoped to one month
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummary {
    /// Exact sum of every expense in scope
    pub total_amount: Money,

    /// Number of expenses in scope
    pub expense_count: usize,

    /// Subtotal per category; uncategorized expenses are left out
    pub category_totals: BTreeMap<String, Money>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl ExpenseSummary {
    /// Aggregate a set of expenses
    ///
    /// Fails with [`ExpenseError::Overflow`] if a total leaves the range of
    /// [`Money`].
    pub fn from_expenses<'a, I>(expenses: I) -> ExpenseResult<Self>
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let mut summary = Self::default();

        for expense in expenses {
            summary.total_amount = summary
                .total_amount
                .checked_add(expense.amount)
                .ok_or_else(|| ExpenseError::Overflow("total of all expenses".into()))?;
            summary.expense_count += 1;

            if let Some(category) = expense.category.as_deref().filter(|c| !c.is_empty()) {
                let subtotal = summary
                    .category_totals
                    .entry(category.to_string())
                    .or_default();
                *subtotal = subtotal.checked_add(expense.amount).ok_or_else(|| {
                    ExpenseError::Overflow(format!("total for category {}", category))
                })?;
            }
        }

        Ok(summary)
    }

    /// Scope this summary to a calendar month
    pub fn for_month(mut self, month: u32, year: i32) -> Self {
        self.month = Some(month);
        self.year = Some(year);
        self
    }

    /// English name of the scoped month, if any
    pub fn month_name(&self) -> Option<&'static str> {
        let month = u8::try_from(self.month?).ok()?;
        Month::try_from(month).ok().map(|m| m.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;
    use chrono::{DateTime, FixedOffset};

    fn expense(id: u64, cents: i64, category: Option<&str>) -> Expense {
        let date: DateTime<FixedOffset> =
            DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z").unwrap();
        Expense::new(
            ExpenseId::new(id),
            format!("expense {}", id),
            Money::from_cents(cents),
            category.map(String::from),
            date,
        )
    }

    #[test]
    fn test_empty_summary() {
        let summary = ExpenseSummary::from_expenses(std::iter::empty()).unwrap();
        assert!(summary.total_amount.is_zero());
        assert_eq!(summary.expense_count, 0);
        assert!(summary.category_totals.is_empty());
    }

    #[test]
    fn test_uncategorized_counted_in_total_only() {
        let expenses = vec![
            expense(1, 350, Some("Food")),
            expense(2, 120000, None),
            expense(3, 650, Some("Food")),
        ];
        let summary = ExpenseSummary::from_expenses(&expenses).unwrap();

        assert_eq!(summary.total_amount, Money::from_cents(121000));
        assert_eq!(summary.expense_count, 3);
        assert_eq!(summary.category_totals.len(), 1);
        assert_eq!(summary.category_totals["Food"], Money::from_cents(1000));
    }

    #[test]
    fn test_total_out_of_range_is_an_error() {
        let huge = Money::parse("70000000000000000000000000000").unwrap();
        let mut expenses = vec![expense(1, 100, Some("Rent")), expense(2, 100, Some("Rent"))];
        for e in &mut expenses {
            e.amount = huge;
        }

        let err = ExpenseSummary::from_expenses(&expenses).unwrap_err();
        assert!(matches!(err, ExpenseError::Overflow(_)));
    }

    #[test]
    fn test_month_name() {
        let summary = ExpenseSummary::default().for_month(6, 2024);
        assert_eq!(summary.month_name(), Some("June"));
        assert_eq!(ExpenseSummary::default().month_name(), None);
    }
}
