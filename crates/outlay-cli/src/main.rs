//! `outlay` — terminal client for the Outlay expense tracker.
//!
//! # Usage
//!
//! ```
//! outlay --url http://localhost:8000 list
//! outlay add 2025-03-15 12.50 food --description "groceries"
//! outlay stats 2025 3
//! outlay dashboard --interval 10
//! ```

mod cache;
mod client;
mod render;

use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use chrono::{Datelike as _, NaiveDate};
use clap::{Parser, Subcommand};
use outlay_core::{budget::Budget, expense::NewExpense, stats::CategoryStat};
use serde::Deserialize;

use cache::TtlCell;
use client::{ApiClient, ApiConfig};
use render::{budgets_table, expenses_table, stats_table};

/// How long dashboard fetches stay fresh between redraws.
const CACHE_TTL: Duration = Duration::from_secs(30);

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "outlay", about = "Terminal client for the Outlay expense tracker")]
struct Args {
  /// Path to a TOML config file (`url = "..."`).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Base URL of the Outlay server (default: http://localhost:8000).
  #[arg(long, env = "OUTLAY_URL")]
  url: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List all expenses, most recent first.
  List,
  /// Record a new expense.
  Add {
    /// Calendar date, ISO format (YYYY-MM-DD).
    date:     NaiveDate,
    amount:   f64,
    category: String,
    #[arg(short, long)]
    description: Option<String>,
  },
  /// Show a single expense.
  Show { id: i64 },
  /// Permanently delete an expense.
  Delete { id: i64 },
  /// List all budget ceilings.
  Budgets,
  /// Set the monthly ceiling for an existing category.
  SetBudget { category: String, amount: f64 },
  /// Spend versus budget for one calendar month.
  Stats { year: i32, month: u32 },
  /// Continuously render the current month's stats and recent expenses.
  Dashboard {
    /// Seconds between redraws.
    #[arg(long, default_value_t = 10)]
    interval: u64,
  },
}

// ─── Config file ──────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
  url: Option<String>,
}

fn resolve_config(args: &Args) -> Result<ApiConfig> {
  let file = match &args.config {
    Some(path) => {
      let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {path:?}"))?;
      toml::from_str::<FileConfig>(&raw)
        .with_context(|| format!("failed to parse config {path:?}"))?
    }
    None => FileConfig::default(),
  };

  let base_url = args
    .url
    .clone()
    .or(file.url)
    .unwrap_or_else(|| "http://localhost:8000".to_string());

  Ok(ApiConfig { base_url })
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();
  let client = ApiClient::new(resolve_config(&args)?)?;

  match args.command {
    Command::List => {
      let expenses = client.list_expenses().await?;
      println!("{}", expenses_table(&expenses));
    }
    Command::Add { date, amount, category, description } => {
      let created = client
        .create_expense(&NewExpense { date, amount, category, description })
        .await?;
      let e = &created.expense;
      println!("Recorded expense {}: {:.2} on {} ({})", e.id, e.amount, e.date, e.category);
      if created.budget_exceeded {
        println!(
          "warning: this puts {} over its budget for {}",
          e.category,
          e.date.format("%Y-%m")
        );
      }
    }
    Command::Show { id } => {
      let expense = client.get_expense(id).await?;
      println!("{}", expenses_table(std::slice::from_ref(&expense)));
    }
    Command::Delete { id } => {
      client.delete_expense(id).await?;
      println!("Deleted expense {id}");
    }
    Command::Budgets => {
      let budgets = client.list_budgets().await?;
      println!("{}", budgets_table(&budgets));
    }
    Command::SetBudget { category, amount } => {
      let budget = client.update_budget(&category, amount).await?;
      println!("Budget for {} set to {:.2}", budget.category, budget.amount);
    }
    Command::Stats { year, month } => {
      let stats = client.monthly_stats(year, month).await?;
      println!("{}", stats_table(&stats));
    }
    Command::Dashboard { interval } => {
      dashboard(&client, Duration::from_secs(interval)).await;
    }
  }

  Ok(())
}

// ─── Dashboard loop ───────────────────────────────────────────────────────────

/// Redraw the current month's stats and the most recent expenses on an
/// interval until interrupted. Fetch failures render as a single inline
/// message with empty tables underneath; the next tick tries again.
async fn dashboard(client: &ApiClient, interval: Duration) {
  let mut stats_cache: TtlCell<Vec<CategoryStat>> = TtlCell::new(CACHE_TTL);
  let mut budget_cache: TtlCell<Vec<Budget>> = TtlCell::new(CACHE_TTL);

  loop {
    let today = chrono::Local::now().date_naive();

    let stats = match stats_cache.get() {
      Some(cached) => Ok(cached),
      None => {
        let fetched = client.monthly_stats(today.year(), today.month()).await;
        if let Ok(stats) = &fetched {
          stats_cache.put(stats.clone());
        }
        fetched
      }
    };

    let budgets = match budget_cache.get() {
      Some(cached) => Ok(cached),
      None => {
        let fetched = client.list_budgets().await;
        if let Ok(budgets) = &fetched {
          budget_cache.put(budgets.clone());
        }
        fetched
      }
    };

    // Expenses are the live part of the view; always refetched.
    let expenses = client.list_expenses().await;

    // Clear screen, cursor to home.
    print!("\x1b[2J\x1b[H");
    println!("Outlay — {}\n", today.format("%B %Y"));

    match stats {
      Ok(stats) => println!("{}\n", stats_table(&stats)),
      Err(e) => println!("stats unavailable: {e}\n"),
    }
    match budgets {
      Ok(budgets) => println!("{}\n", budgets_table(&budgets)),
      Err(e) => println!("budgets unavailable: {e}\n"),
    }
    match expenses {
      Ok(expenses) => {
        let recent: Vec<_> = expenses.into_iter().take(10).collect();
        println!("Recent expenses\n{}", expenses_table(&recent));
      }
      Err(e) => println!("expenses unavailable: {e}"),
    }

    tokio::time::sleep(interval).await;
  }
}
