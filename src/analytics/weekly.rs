//! Comparative weekly report
//!
//! Contrasts the rolling 7-day window ending now with the adjacent window
//! before it: totals per window, the week-over-week expense change, and the
//! dominant expense category.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::models::{Money, Transaction};

/// Income/expense totals for one window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowTotals {
    pub income: Money,
    pub expense: Money,
}

/// Week-over-week comparison of the transaction log
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyReport {
    /// Totals for the 7 days ending now (future-dated transactions included)
    pub this_week: WindowTotals,
    /// Totals for the 7 days before that
    pub last_week: WindowTotals,
    /// Expense change in percent, week over week
    ///
    /// When last week had no expenses the value is 100 if spending appeared
    /// this week and 0 otherwise, signaling "new spending" without dividing
    /// by zero.
    pub expense_change_pct: f64,
    /// Largest expense category this week, with its total
    ///
    /// Ties go to the category recorded first; `None` when the window has
    /// no expenses.
    pub top_category: Option<(String, Money)>,
}

impl WeeklyReport {
    /// Build the report from the transaction log relative to `now`
    pub fn generate(transactions: &[Transaction], now: DateTime<Utc>) -> Self {
        let week_ago = now - Duration::days(7);
        let two_weeks_ago = now - Duration::days(14);

        let mut this_week = WindowTotals::default();
        let mut last_week = WindowTotals::default();

        // Category totals this week, plus first-encountered order for the
        // tie break
        let mut category_totals: HashMap<&str, Money> = HashMap::new();
        let mut category_order: Vec<&str> = Vec::new();

        for txn in transactions {
            if txn.date >= week_ago {
                if txn.is_income() {
                    this_week.income += txn.amount;
                } else {
                    this_week.expense += txn.amount;
                    let entry = category_totals
                        .entry(txn.category.as_str())
                        .or_insert_with(|| {
                            category_order.push(txn.category.as_str());
                            Money::zero()
                        });
                    *entry += txn.amount;
                }
            } else if txn.date >= two_weeks_ago {
                if txn.is_income() {
                    last_week.income += txn.amount;
                } else {
                    last_week.expense += txn.amount;
                }
            }
        }

        let expense_change_pct = if last_week.expense.is_positive() {
            (this_week.expense.cents() - last_week.expense.cents()) as f64
                / last_week.expense.cents() as f64
                * 100.0
        } else if this_week.expense.is_positive() {
            100.0
        } else {
            0.0
        };

        let mut top_category: Option<(String, Money)> = None;
        for name in category_order {
            let total = category_totals[name];
            // Strict comparison keeps the first-encountered category on ties
            if top_category
                .as_ref()
                .map(|(_, best)| total > *best)
                .unwrap_or(true)
            {
                top_category = Some((name.to_string(), total));
            }
        }

        Self {
            this_week,
            last_week,
            expense_change_pct,
            top_category,
        }
    }
}
