//! The `ExpenseStore` trait and the contract every backend must honour.
//!
//! The trait is implemented by storage backends (e.g. `outlay-store-sqlite`).
//! Higher layers (`outlay-api`, `outlay-cli`) depend on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use crate::{
  budget::Budget,
  expense::{CreatedExpense, Expense, NewExpense},
  stats::CategoryStat,
};

/// Abstraction over an Outlay storage backend.
///
/// Every operation is a self-contained unit of work: the backend acquires
/// whatever resources it needs, performs its reads/writes, and releases them
/// on all exit paths. There are no long-lived transactions.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ExpenseStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Expenses ──────────────────────────────────────────────────────────

  /// Persist a new expense and return it with its store-assigned id.
  ///
  /// Fails if `input.amount` is not positive. The returned
  /// [`CreatedExpense`] carries the `budget_exceeded` flag, computed
  /// synchronously after insertion: the category's total spend for the
  /// expense's month (including the new record) compared against the
  /// category's budget ceiling. No budget row means a ceiling of `0`, which
  /// is never exceeded.
  fn create_expense(
    &self,
    input: NewExpense,
  ) -> impl Future<Output = Result<CreatedExpense, Self::Error>> + Send + '_;

  /// All expenses, most recent date first; same-date ties newest-created
  /// first.
  fn list_expenses(
    &self,
  ) -> impl Future<Output = Result<Vec<Expense>, Self::Error>> + Send + '_;

  /// Retrieve an expense by id. Returns `None` if not found.
  fn get_expense(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Expense>, Self::Error>> + Send + '_;

  /// Permanently remove an expense. Returns `false` if no row had that id,
  /// so a second delete of the same id reports absence rather than success.
  fn delete_expense(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Budgets ───────────────────────────────────────────────────────────

  /// All budgets, ordered by category ascending.
  fn list_budgets(
    &self,
  ) -> impl Future<Output = Result<Vec<Budget>, Self::Error>> + Send + '_;

  /// Overwrite the ceiling for an existing category, keeping its id.
  /// Returns `None` if the category has no budget row; the update endpoint
  /// never creates new categories.
  fn update_budget<'a>(
    &'a self,
    category: &'a str,
    amount: f64,
  ) -> impl Future<Output = Result<Option<Budget>, Self::Error>> + Send + 'a;

  // ── Aggregation ───────────────────────────────────────────────────────

  /// Per-category spend versus budget for one calendar month.
  ///
  /// Fails if `month` is outside `1..=12`; `year` is not range-checked.
  /// The result covers exactly the budget categories, ordered by category,
  /// including those with zero spend. Pure read, no side effects.
  fn monthly_stats(
    &self,
    year: i32,
    month: u32,
  ) -> impl Future<Output = Result<Vec<CategoryStat>, Self::Error>> + Send + '_;
}
