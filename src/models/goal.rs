//! Savings goal model
//!
//! A goal is a savings target with progress tracked via explicit
//! contributions. The target amount is fixed at creation and the current
//! amount only ever grows; the domain has no notion of withdrawing from a
//! goal. Exceeding the target is legal and simply means the goal is done.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::GoalId;
use super::money::Money;
use crate::error::{FinaError, FinaResult};

/// Presentation tag for a goal
///
/// Carries no computational meaning; the presentation layer owns the
/// icon/color mapping for each variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalIcon {
    Emergency,
    Travel,
    Home,
    Debt,
    Education,
    Investments,
    #[default]
    Personal,
}

impl GoalIcon {
    /// All known icon tags, in presentation order
    pub const ALL: [GoalIcon; 7] = [
        GoalIcon::Emergency,
        GoalIcon::Travel,
        GoalIcon::Home,
        GoalIcon::Debt,
        GoalIcon::Education,
        GoalIcon::Investments,
        GoalIcon::Personal,
    ];
}

impl fmt::Display for GoalIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Emergency => "emergency",
            Self::Travel => "travel",
            Self::Home => "home",
            Self::Debt => "debt",
            Self::Education => "education",
            Self::Investments => "investments",
            Self::Personal => "personal",
        };
        write!(f, "{}", tag)
    }
}

impl FromStr for GoalIcon {
    type Err = FinaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "emergency" => Ok(Self::Emergency),
            "travel" => Ok(Self::Travel),
            "home" => Ok(Self::Home),
            "debt" => Ok(Self::Debt),
            "education" => Ok(Self::Education),
            "investments" => Ok(Self::Investments),
            "personal" => Ok(Self::Personal),
            other => Err(FinaError::Validation(format!(
                "Unknown goal icon: {}",
                other
            ))),
        }
    }
}

/// A savings target with tracked progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,

    /// Display label
    pub name: String,

    /// Presentation tag (see [`GoalIcon`])
    pub icon: GoalIcon,

    /// Amount saved so far; grows monotonically via contributions
    pub current_amount: Money,

    /// The target; fixed at creation
    pub target_amount: Money,
}

impl Goal {
    /// Create a goal starting from zero saved
    pub fn new(name: impl Into<String>, icon: GoalIcon, target_amount: Money) -> FinaResult<Self> {
        Self::with_progress(name, icon, Money::zero(), target_amount)
    }

    /// Create a goal with an initial saved amount
    pub fn with_progress(
        name: impl Into<String>,
        icon: GoalIcon,
        current_amount: Money,
        target_amount: Money,
    ) -> FinaResult<Self> {
        if current_amount.is_negative() {
            return Err(FinaError::negative_amount(current_amount));
        }
        if target_amount.is_negative() {
            return Err(FinaError::negative_amount(target_amount));
        }
        Ok(Self {
            id: GoalId::new(),
            name: name.into(),
            icon,
            current_amount,
            target_amount,
        })
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} de {})",
            self.name, self.current_amount, self.target_amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_goal_starts_at_zero() {
        let goal = Goal::new("Reserva", GoalIcon::Emergency, Money::from_reais(1000)).unwrap();
        assert!(goal.current_amount.is_zero());
        assert_eq!(goal.target_amount, Money::from_reais(1000));
        assert_eq!(goal.icon, GoalIcon::Emergency);
    }

    #[test]
    fn test_with_progress() {
        let goal = Goal::with_progress(
            "Viagem",
            GoalIcon::Travel,
            Money::from_reais(250),
            Money::from_reais(2000),
        )
        .unwrap();
        assert_eq!(goal.current_amount, Money::from_reais(250));
    }

    #[test]
    fn test_negative_amounts_rejected() {
        assert!(Goal::new("X", GoalIcon::Personal, Money::from_cents(-1)).is_err());
        assert!(Goal::with_progress(
            "X",
            GoalIcon::Personal,
            Money::from_cents(-1),
            Money::from_reais(10)
        )
        .is_err());
    }

    #[test]
    fn test_overachievement_is_legal() {
        // current may exceed target; that just means "completed"
        let goal = Goal::with_progress(
            "Quitação",
            GoalIcon::Debt,
            Money::from_reais(1200),
            Money::from_reais(1000),
        )
        .unwrap();
        assert!(goal.current_amount > goal.target_amount);
    }

    #[test]
    fn test_icon_round_trip() {
        for icon in GoalIcon::ALL {
            let parsed: GoalIcon = icon.to_string().parse().unwrap();
            assert_eq!(icon, parsed);
        }
        assert!("rocket".parse::<GoalIcon>().is_err());
    }

    #[test]
    fn test_icon_serde_tag() {
        let json = serde_json::to_string(&GoalIcon::Investments).unwrap();
        assert_eq!(json, "\"investments\"");
    }

    #[test]
    fn test_display() {
        let goal = Goal::with_progress(
            "Viagem",
            GoalIcon::Travel,
            Money::from_reais(100),
            Money::from_reais(500),
        )
        .unwrap();
        assert_eq!(format!("{}", goal), "Viagem (R$ 100,00 de R$ 500,00)");
    }
}
