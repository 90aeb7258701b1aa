//! Goal display formatting
//!
//! Renders the goal set with progress bars and completion estimates.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::{format_bar, format_percentage};
use crate::analytics::{is_complete, months_remaining, progress};
use crate::models::{Goal, Money};

const BAR_WIDTH: usize = 12;

/// One row of the goal table
#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "Meta")]
    name: String,
    #[tabled(rename = "Guardado")]
    current: String,
    #[tabled(rename = "Alvo")]
    target: String,
    #[tabled(rename = "Progresso")]
    bar: String,
    #[tabled(rename = "Estimativa")]
    estimate: String,
}

/// Format the goal set as a table
///
/// The estimate column shows the heuristic months-to-completion figure, or
/// a celebration marker once the goal is done.
pub fn format_goal_table(goals: &[Goal], monthly_income: Money, savings_rate: f64) -> String {
    if goals.is_empty() {
        return "Nenhuma meta cadastrada.\n".to_string();
    }

    let rows: Vec<GoalRow> = goals
        .iter()
        .map(|goal| {
            let pct = progress(goal);
            let estimate = if is_complete(goal) {
                "Concluída! 🎉".to_string()
            } else {
                match months_remaining(goal, monthly_income, savings_rate) {
                    0 => "—".to_string(),
                    1 => "1 mês".to_string(),
                    n => format!("{} meses", n),
                }
            };
            GoalRow {
                name: goal.name.clone(),
                current: goal.current_amount.to_string(),
                target: goal.target_amount.to_string(),
                bar: format!(
                    "{} {}",
                    format_bar(pct, 100.0, BAR_WIDTH),
                    format_percentage(pct)
                ),
                estimate,
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}
