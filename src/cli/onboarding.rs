//! Onboarding wizard
//!
//! Collects the initial ledger state: the user's name, monthly income,
//! starting balance, and an optional first set of goals. Runs once at the
//! start of every session; the resulting ledger lives in memory only.

use crate::cli::prompt::{prompt_line, prompt_money, prompt_required};
use crate::error::FinaResult;
use crate::ledger::Ledger;
use crate::models::{Goal, GoalIcon, Money};

/// Run the onboarding wizard
///
/// Returns `None` when input ends before onboarding completes.
pub fn run() -> FinaResult<Option<Ledger>> {
    println!();
    println!("===========================================");
    println!("  Bem-vindo(a) à FINA!");
    println!("===========================================");
    println!();
    println!("Vamos configurar sua sessão. Pressione Ctrl+C para cancelar.");
    println!();

    let name = match prompt_required("Como você se chama? ")? {
        Some(name) => name,
        None => return Ok(None),
    };

    let monthly_income = match prompt_money(
        "Qual a sua renda mensal? (ex.: 3000 ou 3000,00) [0]: ",
        Money::zero(),
    )? {
        Some(amount) => amount,
        None => return Ok(None),
    };

    let starting_balance = match prompt_money("Qual o seu saldo atual? [0]: ", Money::zero())? {
        Some(amount) => amount,
        None => return Ok(None),
    };

    let mut goals = Vec::new();
    loop {
        let answer = match prompt_line("Deseja cadastrar uma meta de economia? (s/N): ")? {
            Some(answer) => answer,
            None => break,
        };
        if !matches!(answer.to_lowercase().as_str(), "s" | "sim" | "y" | "yes") {
            break;
        }
        match prompt_goal()? {
            Some(goal) => goals.push(goal),
            None => break,
        }
    }

    println!();
    println!("Tudo pronto, {}! Saldo inicial: {}.", name, starting_balance);
    println!();

    Ok(Some(Ledger::with_goals(
        name,
        monthly_income,
        starting_balance,
        goals,
    )))
}

/// Prompt for a single goal
pub fn prompt_goal() -> FinaResult<Option<Goal>> {
    let name = match prompt_required("Nome da meta (ex.: 'Reserva de emergência'): ")? {
        Some(name) => name,
        None => return Ok(None),
    };

    let target = match prompt_money("Valor alvo: [0]: ", Money::zero())? {
        Some(amount) => amount,
        None => return Ok(None),
    };

    println!("Categoria da meta:");
    for (i, icon) in GoalIcon::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, icon);
    }
    let icon = match prompt_line("Escolha uma categoria [7]: ")? {
        Some(choice) => match choice.trim().parse::<usize>() {
            Ok(n) if (1..=GoalIcon::ALL.len()).contains(&n) => GoalIcon::ALL[n - 1],
            _ => GoalIcon::Personal,
        },
        None => return Ok(None),
    };

    // Amounts were validated non-negative by the prompt
    let goal = Goal::new(name, icon, target)?;
    println!("Meta '{}' cadastrada.", goal.name);
    Ok(Some(goal))
}
