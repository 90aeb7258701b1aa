//! Interactive session
//!
//! The dashboard equivalent for the terminal: a command loop over the
//! in-memory ledger. Recording events mutates the ledger; every view
//! command recomputes its answer from the current snapshot.

use chrono::Utc;

use crate::analytics::{
    balance_trend, net_total, sum_by_category, DailySummary, Period, WeeklyReport,
};
use crate::cli::onboarding;
use crate::cli::prompt::{prompt_line, prompt_money, prompt_required};
use crate::config::{FinaPaths, Settings};
use crate::display::{
    format_bar, format_goal_table, format_money_colored, format_transaction_register, separator,
};
use crate::error::FinaResult;
use crate::insights::{expense_ratio_note, DailyInsight, WeeklyInsight};
use crate::ledger::Ledger;
use crate::models::{Money, Transaction};

/// Days used to derive the daily income from the monthly income
const DAYS_PER_MONTH: i64 = 30;

/// Run the interactive session
pub fn run(paths: &FinaPaths, settings: &mut Settings) -> FinaResult<()> {
    if !settings.has_seen_tutorial {
        print_tutorial();
        settings.has_seen_tutorial = true;
        // A failed save only costs showing the tips again next time
        if let Err(err) = settings.save(paths) {
            eprintln!("Aviso: não foi possível salvar as preferências: {}", err);
        }
    }

    let mut ledger = match onboarding::run()? {
        Some(ledger) => ledger,
        None => return Ok(()),
    };

    println!("Digite 'ajuda' para ver os comandos disponíveis.");

    loop {
        let line = match prompt_line("fina> ")? {
            Some(line) => line,
            None => break,
        };
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = parts.collect();

        match command.as_str() {
            "ajuda" | "help" => print_help(),
            "saldo" => {
                println!("Saldo atual: {}", format_money_colored(ledger.current_balance()));
            }
            "gasto" => handle_expense(&mut ledger, &args),
            "ganho" => handle_income(&mut ledger, &args),
            "fluxo" => print_register(&ledger, &args),
            "metas" => println!(
                "{}",
                format_goal_table(ledger.goals(), ledger.monthly_income(), settings.savings_rate)
            ),
            "meta" => handle_create_goal(&mut ledger)?,
            "aporte" => handle_contribution(&mut ledger)?,
            "resumo" => print_daily_summary(&ledger),
            "relatorio" | "relatório" => print_weekly_report(&ledger),
            "categorias" => print_category_breakdown(&ledger),
            "evolucao" | "evolução" => print_balance_trend(&ledger),
            "sair" | "quit" | "exit" => break,
            other => println!("Comando desconhecido: '{}'. Digite 'ajuda'.", other),
        }
    }

    println!("Até logo, {}! 👋", ledger.user_name());
    Ok(())
}

fn print_tutorial() {
    println!();
    println!("{}", separator(43));
    println!("  Primeiros passos");
    println!("{}", separator(43));
    println!("A FINA acompanha seus gastos, ganhos e metas durante a sessão.");
    println!("Registre cada gasto com 'gasto <valor> <categoria>' e confira o");
    println!("'resumo' no fim do dia. Nada além das preferências fica salvo.");
}

fn print_help() {
    println!("Comandos:");
    println!("  saldo                      Mostra o saldo atual");
    println!("  gasto <valor> <categoria>  Registra um gasto");
    println!("  ganho <valor> [fonte]      Registra um ganho");
    println!("  fluxo [dia|semana|mes|bimestre]");
    println!("                             Lista as transações do período");
    println!("  metas                      Mostra as metas e estimativas");
    println!("  meta                       Cadastra uma nova meta");
    println!("  aporte                     Adiciona dinheiro a uma meta");
    println!("  resumo                     Resumo do dia com insight");
    println!("  relatorio                  Relatório semanal comparativo");
    println!("  categorias                 Gastos por categoria");
    println!("  evolucao                   Evolução do saldo");
    println!("  sair                       Encerra a sessão");
}

fn print_register(ledger: &Ledger, args: &[&str]) {
    let period = match args.first().map(|s| s.to_lowercase()).as_deref() {
        None | Some("semana") => Period::Week,
        Some("dia") => Period::Day,
        Some("mes") | Some("mês") => Period::Month,
        Some("bimestre") => Period::Bimester,
        Some(other) => {
            println!("Período desconhecido: '{}'. Use dia, semana, mes ou bimestre.", other);
            return;
        }
    };

    let filtered: Vec<Transaction> = period
        .filter(ledger.transactions(), Utc::now())
        .into_iter()
        .cloned()
        .collect();
    println!("{}", format_transaction_register(&filtered));
    if !filtered.is_empty() {
        println!("Total no período: {}", format_money_colored(net_total(&filtered)));
    }
}

fn handle_expense(ledger: &mut Ledger, args: &[&str]) {
    let (amount, category) = match args.split_first() {
        Some((value, rest)) if !rest.is_empty() => match Money::parse(value) {
            Ok(amount) => (amount, rest.join(" ")),
            Err(_) => {
                println!("Valor inválido: '{}'.", value);
                return;
            }
        },
        _ => {
            println!("Uso: gasto <valor> <categoria>");
            return;
        }
    };

    let txn = match Transaction::expense(amount, category) {
        Ok(txn) => txn,
        Err(err) => {
            println!("{}", err);
            return;
        }
    };
    if let Err(err) = ledger.record_transaction(txn) {
        println!("{}", err);
        return;
    }

    println!("Gasto adicionado! Saldo: {}", format_money_colored(ledger.current_balance()));

    let spent_today = DailySummary::generate(ledger.transactions(), Utc::now()).spent;
    let daily_income = ledger.monthly_income().div(DAYS_PER_MONTH);
    if let Some(note) = expense_ratio_note(spent_today, daily_income) {
        println!("{}", note);
    }
}

fn handle_income(ledger: &mut Ledger, args: &[&str]) {
    let (amount, source) = match args.split_first() {
        Some((value, rest)) => match Money::parse(value) {
            Ok(amount) => {
                let source = if rest.is_empty() {
                    None
                } else {
                    Some(rest.join(" "))
                };
                (amount, source)
            }
            Err(_) => {
                println!("Valor inválido: '{}'.", value);
                return;
            }
        },
        None => {
            println!("Uso: ganho <valor> [fonte]");
            return;
        }
    };

    let txn = match Transaction::income(amount, source) {
        Ok(txn) => txn,
        Err(err) => {
            println!("{}", err);
            return;
        }
    };
    if let Err(err) = ledger.record_transaction(txn) {
        println!("{}", err);
        return;
    }
    println!("Ganho adicionado! Saldo: {}", format_money_colored(ledger.current_balance()));
}

fn handle_create_goal(ledger: &mut Ledger) -> FinaResult<()> {
    if let Some(goal) = onboarding::prompt_goal()? {
        ledger.create_goal(goal);
    }
    Ok(())
}

fn handle_contribution(ledger: &mut Ledger) -> FinaResult<()> {
    if ledger.goals().is_empty() {
        println!("Nenhuma meta cadastrada. Use 'meta' para criar uma.");
        return Ok(());
    }

    println!("Metas:");
    for (i, goal) in ledger.goals().iter().enumerate() {
        println!("  {}. {}", i + 1, goal);
    }
    let goal_id = match prompt_required("Qual meta? ")? {
        Some(choice) => match choice.trim().parse::<usize>() {
            Ok(n) if (1..=ledger.goals().len()).contains(&n) => ledger.goals()[n - 1].id,
            _ => {
                println!("Escolha inválida.");
                return Ok(());
            }
        },
        None => return Ok(()),
    };

    let amount = match prompt_money("Quanto deseja guardar? [0]: ", Money::zero())? {
        Some(amount) => amount,
        None => return Ok(()),
    };

    match ledger.contribute_to_goal(goal_id, amount) {
        Ok(updated) => println!("Aporte registrado! Total guardado: {}", updated),
        Err(err) => println!("{}", err),
    }
    Ok(())
}

fn print_daily_summary(ledger: &Ledger) {
    let summary = DailySummary::generate(ledger.transactions(), Utc::now());
    println!("Resumo do dia");
    println!("{}", separator(30));
    println!("Ganhos:   {}", format_money_colored(summary.earned));
    println!("Gastos:   {}", format_money_colored(-summary.spent));
    println!("Variação: {}", format_money_colored(summary.variation));

    let daily_income = ledger.monthly_income().div(DAYS_PER_MONTH);
    println!();
    println!("{}", DailyInsight::select(summary.spent, daily_income).message());
}

fn print_weekly_report(ledger: &Ledger) {
    let report = WeeklyReport::generate(ledger.transactions(), Utc::now());
    println!("Relatório semanal");
    println!("{}", separator(30));
    println!(
        "Esta semana:    ganhos {} | gastos {}",
        report.this_week.income, report.this_week.expense
    );
    println!(
        "Semana passada: ganhos {} | gastos {}",
        report.last_week.income, report.last_week.expense
    );
    println!();
    println!("{}", WeeklyInsight::select(report.expense_change_pct).message());
    if let Some((category, total)) = &report.top_category {
        println!("Sua maior categoria de gasto foi {} ({}).", category, total);
    }
}

fn print_category_breakdown(ledger: &Ledger) {
    let totals = sum_by_category(ledger.transactions());
    if totals.is_empty() {
        println!("Sem dados de gastos para exibir.");
        return;
    }

    let mut entries: Vec<(String, Money)> = totals.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    let max = entries[0].1;

    println!("Distribuição de gastos");
    println!("{}", separator(30));
    for (category, total) in entries {
        println!(
            "{:<16} {} {}",
            category,
            format_bar(total.cents() as f64, max.cents() as f64, 16),
            total
        );
    }
}

fn print_balance_trend(ledger: &Ledger) {
    // The trend anchors on the current balance, so the plotted line shows
    // the shape of recent activity, not the exact historical balance
    let points = balance_trend(ledger.transactions(), ledger.current_balance());
    if points.is_empty() {
        println!("Sem histórico para exibir.");
        return;
    }

    println!("Evolução de saldo");
    println!("{}", separator(30));
    for point in points {
        println!("{}  {}", point.label, format_money_colored(point.balance));
    }
}
