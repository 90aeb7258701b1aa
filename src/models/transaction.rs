//! Transaction model
//!
//! Represents a single dated income or expense event. The transaction log is
//! append-only: once recorded, a transaction's kind, amount, and date never
//! change, and no update or delete operation exists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;
use crate::error::{FinaError, FinaResult};

/// Fixed category label applied to every income transaction
///
/// Expenses carry a free-form category; income is always bucketed under this
/// sentinel, with the free-text `source` field describing where it came from.
pub const INCOME_CATEGORY: &str = "Ganho";

/// The kind of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Ganho"),
            Self::Expense => write!(f, "Gasto"),
        }
    }
}

/// A single income or expense event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned at creation
    pub id: TransactionId,

    /// Income or expense; immutable after creation
    pub kind: TransactionKind,

    /// Non-negative amount
    pub amount: Money,

    /// Free-form category for expenses; [`INCOME_CATEGORY`] for income
    pub category: String,

    /// Where the money came from (income only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// When the event occurred, assigned at creation
    pub date: DateTime<Utc>,
}

impl Transaction {
    /// Create an expense dated now
    ///
    /// The amount must be non-negative; zero is accepted.
    pub fn expense(amount: Money, category: impl Into<String>) -> FinaResult<Self> {
        Self::expense_at(amount, category, Utc::now())
    }

    /// Create an expense with an explicit timestamp
    pub fn expense_at(
        amount: Money,
        category: impl Into<String>,
        date: DateTime<Utc>,
    ) -> FinaResult<Self> {
        if amount.is_negative() {
            return Err(FinaError::negative_amount(amount));
        }
        Ok(Self {
            id: TransactionId::new(),
            kind: TransactionKind::Expense,
            amount,
            category: category.into(),
            source: None,
            date,
        })
    }

    /// Create an income event dated now
    ///
    /// The category is always [`INCOME_CATEGORY`]; `source` is free text
    /// ("Salário", "Extra", ...).
    pub fn income(amount: Money, source: Option<String>) -> FinaResult<Self> {
        Self::income_at(amount, source, Utc::now())
    }

    /// Create an income event with an explicit timestamp
    pub fn income_at(
        amount: Money,
        source: Option<String>,
        date: DateTime<Utc>,
    ) -> FinaResult<Self> {
        if amount.is_negative() {
            return Err(FinaError::negative_amount(amount));
        }
        Ok(Self {
            id: TransactionId::new(),
            kind: TransactionKind::Income,
            amount,
            category: INCOME_CATEGORY.to_string(),
            source,
            date,
        })
    }

    /// Check if this is an income event
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The signed effect of this transaction on a balance
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%d/%m/%Y"),
            self.kind,
            self.amount,
            self.category
        )
    }
}
