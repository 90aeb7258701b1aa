//! Deterministic insight messages
//!
//! Rule tables mapping computed aggregates to a small fixed set of
//! user-facing messages, evaluated first match wins. This path is
//! synchronous, pure, and always available; it is deliberately separate
//! from the [`crate::advisor`] boundary, which is allowed to fail.

use crate::models::Money;

/// Daily spending verdict against the user's average daily income
///
/// "Daily income" is `monthly_income / 30`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyInsight {
    /// Nothing spent today
    NoSpending,
    /// Spent under 50% of the daily income
    WellUnderBudget,
    /// Spent between 50% and 100% (inclusive) of the daily income
    OnTrack,
    /// Spent over the daily income
    OverBudget,
}

impl DailyInsight {
    /// Pick the daily insight for today's spending
    ///
    /// Zero spending is checked before the ratio ladder; it would otherwise
    /// be swallowed by the under-50% rule. With no positive daily income to
    /// compare against, any spending counts as over budget.
    pub fn select(spent_today: Money, daily_income: Money) -> Self {
        if spent_today.is_zero() {
            return Self::NoSpending;
        }
        if !daily_income.is_positive() {
            return Self::OverBudget;
        }
        let ratio = spent_today.cents() as f64 / daily_income.cents() as f64 * 100.0;
        if ratio < 50.0 {
            Self::WellUnderBudget
        } else if ratio <= 100.0 {
            Self::OnTrack
        } else {
            Self::OverBudget
        }
    }

    /// The canned message for this verdict
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoSpending => {
                "Nenhum gasto registrado hoje. Que tal aproveitar para guardar um pouco? 💪"
            }
            Self::WellUnderBudget => {
                "Ótimo trabalho! Hoje você gastou bem abaixo da sua renda diária. 👏"
            }
            Self::OnTrack => {
                "Você está no caminho certo: os gastos de hoje cabem na sua renda diária. 👍"
            }
            Self::OverBudget => {
                "Atenção: seus gastos de hoje passaram da sua renda diária. Amanhã dá para compensar! 🙂"
            }
        }
    }
}

/// Week-over-week spending verdict
///
/// Changes within ±1% read as stable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeeklyInsight {
    /// Spending dropped by more than 1% (magnitude in percent)
    Reduced(f64),
    /// Spending grew by more than 1% (magnitude in percent)
    Increased(f64),
    /// Within ±1% of last week
    Stable,
}

impl WeeklyInsight {
    /// Pick the weekly insight for an expense change percentage
    pub fn select(expense_change_pct: f64) -> Self {
        if expense_change_pct < -1.0 {
            Self::Reduced(expense_change_pct.abs())
        } else if expense_change_pct > 1.0 {
            Self::Increased(expense_change_pct)
        } else {
            Self::Stable
        }
    }

    /// The canned message for this verdict
    pub fn message(&self) -> String {
        match self {
            Self::Reduced(pct) => format!(
                "Ótimo! Você reduziu seus gastos em {:.0}% em relação à semana passada.",
                pct
            ),
            Self::Increased(pct) => {
                format!("Atenção, seus gastos aumentaram {:.0}% esta semana.", pct)
            }
            Self::Stable => "Seus gastos se mantiveram estáveis.".to_string(),
        }
    }
}

/// One-line note shown right after an expense is recorded
///
/// Relates today's spending to the daily income. `None` when there is no
/// positive daily income to compare against.
pub fn expense_ratio_note(spent_today: Money, daily_income: Money) -> Option<String> {
    if !daily_income.is_positive() {
        return None;
    }
    let pct = spent_today.cents() as f64 / daily_income.cents() as f64 * 100.0;
    Some(format!(
        "Hoje você gastou {}, o que representa {:.0}% da sua renda diária.",
        spent_today, pct
    ))
}
