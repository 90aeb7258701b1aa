//! Goal progress and completion estimates

use crate::models::{Goal, Money};

/// Assumed share of monthly income set aside for a goal each month
///
/// A projection heuristic, not a forecast: the estimate ignores the user's
/// actual contribution pace. Callers can tune the rate (it is persisted in
/// [`crate::config::Settings`]).
pub const DEFAULT_SAVINGS_RATE: f64 = 0.10;

/// Percent complete, `current / target * 100`
///
/// A goal with a zero target has no meaningful progress and reports 0,
/// whatever its current amount.
pub fn progress(goal: &Goal) -> f64 {
    if !goal.target_amount.is_positive() {
        return 0.0;
    }
    goal.current_amount.cents() as f64 / goal.target_amount.cents() as f64 * 100.0
}

/// Whether the goal has reached (or passed) its target
pub fn is_complete(goal: &Goal) -> bool {
    progress(goal) >= 100.0
}

/// Estimated months until the goal completes
///
/// Assumes a fixed monthly contribution of `monthly_income * savings_rate`.
/// Returns 0 when nothing remains or when no positive contribution can be
/// assumed — "no estimate applicable", not "done this month".
pub fn months_remaining(goal: &Goal, monthly_income: Money, savings_rate: f64) -> u32 {
    let remaining = goal.target_amount - goal.current_amount;
    if !remaining.is_positive() {
        return 0;
    }
    let contribution = monthly_income.scale(savings_rate);
    if !contribution.is_positive() {
        return 0;
    }
    (remaining.cents() as f64 / contribution.cents() as f64).ceil() as u32
}
