//! Core data models for FINA
//!
//! This module contains the data structures that represent the personal
//! finance domain: money, transactions, and savings goals.

pub mod goal;
pub mod ids;
pub mod money;
pub mod transaction;

pub use goal::{Goal, GoalIcon};
pub use ids::{GoalId, TransactionId};
pub use money::Money;
pub use transaction::{Transaction, TransactionKind, INCOME_CATEGORY};
