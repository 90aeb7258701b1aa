//! Balance trend reconstruction
//!
//! Replays the transaction log into a running-balance time series for the
//! balance-evolution chart. This is a restartable pure computation, not
//! persisted state.

use crate::models::{Money, Transaction};

/// One point on the balance trend line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalancePoint {
    /// Display-formatted date of the transaction
    pub label: String,
    /// Balance after applying the transaction
    pub balance: Money,
}

/// Replay transactions in date order into a running-balance series
///
/// Sorts the transactions ascending by date and applies each one to
/// `baseline` in turn (income adds, expense subtracts), emitting one point
/// per transaction labeled `dd/mm/yyyy`.
///
/// Known approximation: for the retrospective trend view the caller passes
/// the *current* balance as `baseline`, not the balance before the earliest
/// plotted transaction, so the line is offset from true history. The chart
/// is illustrative of shape, not an exact ledger replay; do not "correct"
/// the baseline here.
pub fn balance_trend(transactions: &[Transaction], baseline: Money) -> Vec<BalancePoint> {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by_key(|t| t.date);

    let mut points = Vec::with_capacity(ordered.len());
    let mut balance = baseline;
    for txn in ordered {
        balance += txn.signed_amount();
        points.push(BalancePoint {
            label: txn.date.format("%d/%m/%Y").to_string(),
            balance,
        });
    }
    points
}
