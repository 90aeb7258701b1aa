//! Sums over the transaction log
//!
//! Total functions: any transaction sequence, including the empty one,
//! produces a defined result. All of them accept anything that iterates
//! over `&Transaction`, so they work on the full log as well as on a
//! period-filtered subset.

use std::collections::HashMap;

use crate::models::{Money, Transaction, TransactionKind};

/// Sum the amounts of all transactions of the given kind
pub fn sum_by_kind<'a, I>(transactions: I, kind: TransactionKind) -> Money
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Sum expense amounts per category
///
/// Income transactions are ignored; the keys are exactly the distinct
/// expense categories present.
pub fn sum_by_category<'a, I>(transactions: I) -> HashMap<String, Money>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals: HashMap<String, Money> = HashMap::new();
    for txn in transactions.into_iter().filter(|t| t.is_expense()) {
        *totals.entry(txn.category.clone()).or_insert(Money::zero()) += txn.amount;
    }
    totals
}

/// Income sum minus expense sum
pub fn net_total<'a, I>(transactions: I) -> Money
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .map(|t| t.signed_amount())
        .sum()
}
