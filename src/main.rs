use anyhow::Result;
use clap::{Parser, Subcommand};

use fina::cli::session;
use fina::config::{FinaPaths, Settings};

#[derive(Parser)]
#[command(
    name = "fina",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "FINA is a terminal-based personal finance tracker. It keeps an \
                  in-memory ledger of your income, expenses, and savings goals for \
                  the session and turns it into daily and weekly summaries, \
                  category breakdowns, and goal completion estimates."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive tracking session (default)
    Session,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FinaPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        None | Some(Commands::Session) => {
            session::run(&paths, &mut settings)?;
        }
        Some(Commands::Config) => {
            println!("Config dir:      {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Currency symbol: {}", settings.currency_symbol);
            println!("Date format:     {}", settings.date_format);
            println!("Savings rate:    {:.0}%", settings.savings_rate * 100.0);
            println!("Seen tutorial:   {}", settings.has_seen_tutorial);
            println!("Subscribed:      {}", settings.is_subscribed);
        }
    }

    Ok(())
}
