//! FINA - Terminal-based personal finance tracker
//!
//! This library provides the core functionality for FINA: an in-memory
//! ledger of income and expense events, savings goals with contribution
//! tracking, and the deterministic analytics that turn the raw event log
//! into the summaries, reports, and insights shown to the user.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, goals)
//! - `ledger`: The owning aggregate and its mutation operations
//! - `analytics`: Pure query functions over ledger snapshots
//! - `insights`: Deterministic rule-based insight messages
//! - `advisor`: Boundary types for the external AI assistant
//! - `display`: Terminal formatting helpers
//! - `cli`: Onboarding wizard and interactive session
//!
//! All analytic components are pure functions of a ledger snapshot plus a
//! reference timestamp; only the [`ledger::Ledger`] mutates state, and only
//! through its own operations.
//!
//! # Example
//!
//! ```rust
//! use fina::ledger::Ledger;
//! use fina::models::{Money, Transaction};
//!
//! let mut ledger = Ledger::new("Ana", Money::from_cents(300_000), Money::zero());
//! ledger.record_transaction(Transaction::expense(Money::from_cents(8_000), "Alimentação")?)?;
//! assert_eq!(ledger.current_balance(), Money::from_cents(-8_000));
//! # Ok::<(), fina::FinaError>(())
//! ```

pub mod advisor;
pub mod analytics;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod insights;
pub mod ledger;
pub mod models;

pub use error::{FinaError, FinaResult};
pub use ledger::Ledger;
