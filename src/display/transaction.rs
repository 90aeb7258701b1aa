//! Transaction display formatting
//!
//! Renders the transaction log as a register table for the session's
//! "fluxo" view.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Transaction;

/// One row of the transaction register
#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Data")]
    date: String,
    #[tabled(rename = "Tipo")]
    kind: String,
    #[tabled(rename = "Categoria")]
    category: String,
    #[tabled(rename = "Valor")]
    amount: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(txn: &Transaction) -> Self {
        let category = match &txn.source {
            Some(source) => format!("{} ({})", txn.category, source),
            None => txn.category.clone(),
        };
        Self {
            date: txn.date.format("%d/%m/%Y").to_string(),
            kind: txn.kind.to_string(),
            category,
            amount: txn.amount.to_string(),
        }
    }
}

/// Format a list of transactions as a register table
///
/// Newest entries last, matching the log's insertion order.
pub fn format_transaction_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "Nenhuma transação registrada.\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions.iter().map(TransactionRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}
