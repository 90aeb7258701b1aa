//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including tables, colors, and progress bars.

pub mod goal;
pub mod report;
pub mod transaction;

pub use goal::format_goal_table;
pub use report::{format_bar, format_money_colored, format_percentage, separator};
pub use transaction::format_transaction_register;
