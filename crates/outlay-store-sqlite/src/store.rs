//! [`SqliteStore`] — the SQLite implementation of [`ExpenseStore`].

use std::{collections::HashMap, path::Path};

use chrono::Datelike as _;
use rusqlite::OptionalExtension as _;

use outlay_core::{
  budget::{Budget, DEFAULT_CATEGORIES},
  expense::{CreatedExpense, Expense, NewExpense},
  stats::{self, CategoryStat},
  store::ExpenseStore,
};

use crate::{
  Error, Result,
  encode::{RawExpense, encode_date},
  schema::{SCHEMA, SEED_CATEGORY},
};

const EXPENSE_COLUMNS: &str = "id, date, amount, category, description";

fn read_expense_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawExpense> {
  Ok(RawExpense {
    id:          row.get(0)?,
    date:        row.get(1)?,
    amount:      row.get(2)?,
    category:    row.get(3)?,
    description: row.get(4)?,
  })
}

fn read_budget_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Budget> {
  Ok(Budget {
    id:       row.get(0)?,
    category: row.get(1)?,
    amount:   row.get(2)?,
  })
}

/// Sum of a category's expenses within one calendar month, via prefix match
/// on the stored ISO date. `NULL` (no matching rows) collapses to `0`.
fn month_total(
  conn: &rusqlite::Connection,
  category: &str,
  month_like: &str,
) -> rusqlite::Result<f64> {
  let total: Option<f64> = conn.query_row(
    "SELECT SUM(amount) FROM expenses WHERE category = ?1 AND date LIKE ?2",
    rusqlite::params![category, month_like],
    |r| r.get(0),
  )?;
  Ok(total.unwrap_or(0.0))
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// An Outlay expense store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. Every
/// operation runs as one scoped closure on the connection's worker thread, so
/// acquisition and release are bounded per unit of work on all exit paths.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path`, run schema initialisation, and seed
  /// the canonical categories.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Idempotent migration step: create tables, then insert any missing
  /// canonical category with a zero ceiling. Runs once at open, never from
  /// request handling.
  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        let mut seed = conn.prepare(SEED_CATEGORY)?;
        for category in DEFAULT_CATEGORIES {
          seed.execute(rusqlite::params![category])?;
        }
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── ExpenseStore impl ───────────────────────────────────────────────────────

impl ExpenseStore for SqliteStore {
  type Error = Error;

  // ── Expenses ──────────────────────────────────────────────────────────────

  async fn create_expense(&self, input: NewExpense) -> Result<CreatedExpense> {
    input.validate().map_err(Error::Core)?;

    let date_str   = encode_date(input.date);
    let month_like = format!(
      "{}%",
      stats::month_prefix(input.date.year(), input.date.month())
        .map_err(Error::Core)?
    );
    let category    = input.category.clone();
    let amount      = input.amount;
    let description = input.description.clone();

    let (id, total_spent, budget_amount): (i64, f64, f64) = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO expenses (date, amount, category, description)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![date_str, amount, category, description],
        )?;
        let id = conn.last_insert_rowid();

        // Post-insert month total, so the new record is included.
        let total = month_total(conn, &category, &month_like)?;

        let budget: Option<f64> = conn
          .query_row(
            "SELECT amount FROM budgets WHERE category = ?1",
            rusqlite::params![category],
            |r| r.get(0),
          )
          .optional()?;

        Ok((id, total, budget.unwrap_or(0.0)))
      })
      .await?;

    Ok(CreatedExpense {
      expense:         Expense {
        id,
        date: input.date,
        amount: input.amount,
        category: input.category,
        description: input.description,
      },
      budget_exceeded: stats::budget_exceeded(budget_amount, total_spent),
    })
  }

  async fn list_expenses(&self) -> Result<Vec<Expense>> {
    let raws: Vec<RawExpense> = self
      .conn
      .call(|conn| {
        // Same-date ties break toward the newest row id, i.e. most recently
        // created first.
        let mut stmt = conn.prepare(&format!(
          "SELECT {EXPENSE_COLUMNS} FROM expenses ORDER BY date DESC, id DESC"
        ))?;
        let rows = stmt
          .query_map([], read_expense_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawExpense::into_expense).collect()
  }

  async fn get_expense(&self, id: i64) -> Result<Option<Expense>> {
    let raw: Option<RawExpense> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {EXPENSE_COLUMNS} FROM expenses WHERE id = ?1"),
              rusqlite::params![id],
              read_expense_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawExpense::into_expense).transpose()
  }

  async fn delete_expense(&self, id: i64) -> Result<bool> {
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM expenses WHERE id = ?1",
          rusqlite::params![id],
        )?)
      })
      .await?;

    Ok(affected > 0)
  }

  // ── Budgets ───────────────────────────────────────────────────────────────

  async fn list_budgets(&self) -> Result<Vec<Budget>> {
    let budgets = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, category, amount FROM budgets ORDER BY category",
        )?;
        let rows = stmt
          .query_map([], read_budget_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(budgets)
  }

  async fn update_budget(
    &self,
    category: &str,
    amount: f64,
  ) -> Result<Option<Budget>> {
    let category = category.to_owned();

    let updated: Option<Budget> = self
      .conn
      .call(move |conn| {
        let affected = conn.execute(
          "UPDATE budgets SET amount = ?1 WHERE category = ?2",
          rusqlite::params![amount, category],
        )?;
        if affected == 0 {
          return Ok(None);
        }
        Ok(
          conn
            .query_row(
              "SELECT id, category, amount FROM budgets WHERE category = ?1",
              rusqlite::params![category],
              read_budget_row,
            )
            .optional()?,
        )
      })
      .await?;

    Ok(updated)
  }

  // ── Aggregation ───────────────────────────────────────────────────────────

  async fn monthly_stats(
    &self,
    year: i32,
    month: u32,
  ) -> Result<Vec<CategoryStat>> {
    let month_like =
      format!("{}%", stats::month_prefix(year, month).map_err(Error::Core)?);

    let (budgets, spent): (Vec<Budget>, HashMap<String, f64>) = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, category, amount FROM budgets ORDER BY category",
        )?;
        let budgets = stmt
          .query_map([], read_budget_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut stmt = conn.prepare(
          "SELECT category, SUM(amount) FROM expenses
           WHERE date LIKE ?1 GROUP BY category",
        )?;
        let spent = stmt
          .query_map(rusqlite::params![month_like], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
          })?
          .collect::<rusqlite::Result<HashMap<_, _>>>()?;

        Ok((budgets, spent))
      })
      .await?;

    Ok(stats::compile_stats(&budgets, &spent))
  }
}
