//! Daily summary
//!
//! What happened today: total spent, total earned, and the day's variation.

use chrono::{DateTime, Utc};

use super::aggregate::sum_by_kind;
use super::period::Period;
use crate::models::{Money, Transaction, TransactionKind};

/// Totals for the current calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySummary {
    /// Expenses recorded today
    pub spent: Money,
    /// Income recorded today
    pub earned: Money,
    /// `earned - spent`; negative when the day ran at a loss
    pub variation: Money,
}

impl DailySummary {
    /// Summarize the transactions dated on the same calendar day as `now`
    pub fn generate(transactions: &[Transaction], now: DateTime<Utc>) -> Self {
        let today = Period::Day.filter(transactions, now);
        let spent = sum_by_kind(today.iter().copied(), TransactionKind::Expense);
        let earned = sum_by_kind(today.iter().copied(), TransactionKind::Income);
        Self {
            spent,
            earned,
            variation: earned - spent,
        }
    }
}

/// The last `n` transactions in insertion order
///
/// The advisor snapshot shows the five most recent events; the log's
/// insertion order approximates chronological order.
pub fn recent(transactions: &[Transaction], n: usize) -> &[Transaction] {
    let start = transactions.len().saturating_sub(n);
    &transactions[start..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_day() {
        let summary = DailySummary::generate(&[], at(15, 12));
        assert_eq!(summary.spent, Money::zero());
        assert_eq!(summary.earned, Money::zero());
        assert_eq!(summary.variation, Money::zero());
    }

    #[test]
    fn test_same_day_only() {
        let txns = vec![
            Transaction::expense_at(Money::from_reais(80), "Alimentação", at(15, 9)).unwrap(),
            Transaction::expense_at(Money::from_reais(20), "Transporte", at(15, 18)).unwrap(),
            Transaction::income_at(Money::from_reais(150), None, at(15, 10)).unwrap(),
            // Yesterday: must not count
            Transaction::expense_at(Money::from_reais(500), "Moradia", at(14, 23)).unwrap(),
        ];

        let summary = DailySummary::generate(&txns, at(15, 12));
        assert_eq!(summary.spent, Money::from_reais(100));
        assert_eq!(summary.earned, Money::from_reais(150));
        assert_eq!(summary.variation, Money::from_reais(50));
    }

    #[test]
    fn test_negative_variation() {
        let txns = vec![
            Transaction::expense_at(Money::from_reais(90), "Lazer", at(15, 9)).unwrap(),
            Transaction::income_at(Money::from_reais(40), None, at(15, 10)).unwrap(),
        ];
        let summary = DailySummary::generate(&txns, at(15, 12));
        assert_eq!(summary.variation, Money::from_reais(-50));
    }

    #[test]
    fn test_recent() {
        let txns: Vec<Transaction> = (1..=8)
            .map(|d| {
                Transaction::expense_at(Money::from_reais(d as i64), "Outros", at(d, 9)).unwrap()
            })
            .collect();

        let last5 = recent(&txns, 5);
        assert_eq!(last5.len(), 5);
        assert_eq!(last5[0].amount, Money::from_reais(4));
        assert_eq!(last5[4].amount, Money::from_reais(8));

        // Shorter logs come back whole
        assert_eq!(recent(&txns[..3], 5).len(), 3);
        assert!(recent(&[], 5).is_empty());
    }
}
