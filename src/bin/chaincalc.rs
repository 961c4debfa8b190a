//! Chaincalc interactive session
//!
//! Reads calculator keys from standard input, one line at a time, and prints
//! the display after each line.
//!
//! ## Usage
//!
//! ```bash
//! chaincalc --history-limit 20
//! > 5+3*2=
//! 16
//! > history
//! 1. 8 × 2 = 16 (just now)
//! ```
//!
//! Besides single keys (`0-9 . + - * / = % c`), a line may contain the words
//! `sqrt`, `sq`, `mc`, `mr`, `m+`, `m-` and `clear-history`. The lines
//! `history`, `recall N` and `quit` are session commands.

use anyhow::{Context, Result};
use chaincalc::config::{CalculatorBuilder, CalculatorConfig};
use chaincalc::engine::{Calculator, Signal};
use chaincalc::keymap::parse_line;
use chrono::Utc;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "chaincalc")]
#[command(about = "Chained left-to-right calculator", long_about = None)]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the number of history entries kept
    #[arg(long)]
    history_limit: Option<usize>,

    /// Override how long errors stay visible, in milliseconds
    #[arg(long)]
    error_ttl_ms: Option<u64>,

    /// Print a JSON snapshot after every line instead of the display
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let mut calc = build_calculator(&args)?;
    info!(config = ?calc.config(), "Session started");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    prompt(&mut stdout, args.json)?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        calc.expire_error(Utc::now());

        match line.trim() {
            "" => {}
            "quit" | "exit" => break,
            "history" => print_history(&mut stdout, &calc)?,
            cmd if cmd.starts_with("recall ") => recall(&mut calc, &cmd["recall ".len()..]),
            keys => run_keys(&mut calc, keys),
        }

        render(&mut stdout, &calc, args.json)?;
        prompt(&mut stdout, args.json)?;
    }

    info!(entries = calc.history().len(), "Session ended");
    Ok(())
}

fn build_calculator(args: &Args) -> Result<Calculator> {
    let config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {path:?}"))?;
            toml::from_str::<CalculatorConfig>(&text)
                .with_context(|| "Failed to parse TOML configuration")?
        }
        None => CalculatorConfig::default(),
    };

    let mut builder = CalculatorBuilder::from_config(config);
    if let Some(limit) = args.history_limit {
        builder = builder.history_limit(limit);
    }
    if let Some(ttl) = args.error_ttl_ms {
        builder = builder.error_ttl_ms(ttl);
    }

    builder.build().context("Invalid configuration")
}

fn run_keys(calc: &mut Calculator, keys: &str) {
    for input in parse_line(keys) {
        match input {
            Ok(input) => {
                if let Signal::Recorded(item) = calc.handle(input) {
                    debug!(calculation = %item.calculation, result = %item.result, "Calculated");
                }
            }
            Err(c) => warn!(key = %c, "Ignoring unknown key"),
        }
    }
}

fn recall(calc: &mut Calculator, arg: &str) {
    let entry = arg
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| calc.history().get(index).cloned());

    match entry {
        Some(item) => calc.recall_history_entry(&item),
        None => warn!(arg, "No such history entry"),
    }
}

fn render(out: &mut impl Write, calc: &Calculator, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(&calc.snapshot())?)?;
        return Ok(());
    }

    let badge = if calc.has_memory() { "M " } else { "" };
    if let Some(trail) = calc.display_trail() {
        writeln!(out, "  {trail}")?;
    }
    writeln!(out, "{badge}{}", calc.current_value())?;
    if let Some(notice) = calc.error() {
        writeln!(out, "error: {}", notice.message)?;
    }
    Ok(())
}

fn print_history(out: &mut impl Write, calc: &Calculator) -> Result<()> {
    if calc.history().is_empty() {
        writeln!(out, "(no history)")?;
    }
    let now = Utc::now();
    for (n, item) in calc.history().iter().enumerate() {
        writeln!(
            out,
            "{}. {} = {} ({})",
            n + 1,
            item.calculation,
            item.result,
            item.age_label(now)
        )?;
    }
    Ok(())
}

fn prompt(out: &mut impl Write, json: bool) -> Result<()> {
    if !json {
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}
