//! Analytics over ledger snapshots
//!
//! Every function here is pure and total: it reads a snapshot of the
//! transaction log (plus a reference timestamp where time matters) and
//! produces a derived view. Nothing in this module mutates the ledger,
//! performs I/O, or fails on degenerate input.

pub mod aggregate;
pub mod balance;
pub mod daily;
pub mod goals;
pub mod period;
pub mod weekly;

pub use aggregate::{net_total, sum_by_category, sum_by_kind};
pub use balance::{balance_trend, BalancePoint};
pub use daily::{recent, DailySummary};
pub use goals::{is_complete, months_remaining, progress, DEFAULT_SAVINGS_RATE};
pub use period::Period;
pub use weekly::{WeeklyReport, WindowTotals};
