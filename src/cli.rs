//! CLI definitions and entry point

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use loanscreen::config::Settings;
use loanscreen::console::{Console, KeyMode};
use loanscreen::report::OutputMode;
use loanscreen::session::{Session, SessionOptions};

/// loanscreen - Loan eligibility screening at the console
#[derive(Parser, Debug)]
#[command(
    name = "loanscreen",
    version = loanscreen::VERSION,
    about = "Screen loan applications by loan-to-value and credit score",
    long_about = "Screen loan applications by loan-to-value and credit score.\n\n\
                  Press any key to evaluate an application, R for a report of every\n\
                  evaluation so far, or X to exit. Results are kept in memory only."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print reports as JSON (machine-readable)
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Settings file (default: ~/.config/loanscreen/config.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let settings = Settings::load(cli.config.as_deref()).context("failed to load settings")?;

    if cli.no_color || !settings.display.color {
        colored::control::set_override(false);
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let stdin = io::stdin();
    let key_mode = if stdin.is_terminal() {
        KeyMode::Raw
    } else {
        KeyMode::Line
    };

    let console = Console::new(stdin.lock(), io::stdout().lock(), key_mode);
    let options = SessionOptions {
        output_mode,
        currency: settings.display.currency,
    };

    Session::new(console, options).run().context("session aborted")?;
    Ok(())
}
