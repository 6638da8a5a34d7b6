//! Monthly spend-versus-budget aggregation.
//!
//! The store fetches two result sets — budget rows and per-category sums for
//! one calendar month — and the join, zero-handling, and percentage policy
//! live here so they can be exercised without a database.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, budget::Budget};

/// Per-category aggregate for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStat {
  pub category:   String,
  /// Total spent in the month; `0` when no expenses matched.
  pub spent:      f64,
  /// The category's budget ceiling at query time.
  pub budget:     f64,
  /// `spent / budget * 100`, or `0` when no budget is set.
  pub percentage: f64,
}

/// Check that `month` is a real calendar month number.
pub fn validate_month(month: u32) -> Result<()> {
  if (1..=12).contains(&month) {
    Ok(())
  } else {
    Err(Error::MonthOutOfRange(month))
  }
}

/// The `YYYY-MM` key shared by every ISO date in the given month.
///
/// Dates are stored as ISO-8601 strings, so a month filter is a prefix match
/// on this key. `year` is deliberately not range-checked.
pub fn month_prefix(year: i32, month: u32) -> Result<String> {
  validate_month(month)?;
  Ok(format!("{year:04}-{month:02}"))
}

/// Join budget rows with per-category month sums into one stat per category.
///
/// The budget set defines the category universe of the result: spend in a
/// category with no budget row is dropped, and every budget category appears
/// even with zero spend. A zero budget always reports `0%`, whatever was
/// spent. Output order follows `budgets`.
pub fn compile_stats(
  budgets: &[Budget],
  spent_by_category: &HashMap<String, f64>,
) -> Vec<CategoryStat> {
  budgets
    .iter()
    .map(|b| {
      let spent = spent_by_category.get(&b.category).copied().unwrap_or(0.0);
      let percentage = if b.amount > 0.0 {
        spent / b.amount * 100.0
      } else {
        0.0
      };
      CategoryStat {
        category: b.category.clone(),
        spent,
        budget: b.amount,
        percentage,
      }
    })
    .collect()
}

/// At-creation-time budget check: exceeded only when a budget is set and the
/// month's cumulative spend has passed it. A missing or zero budget is never
/// exceeded.
pub fn budget_exceeded(budget_amount: f64, total_spent: f64) -> bool {
  budget_amount > 0.0 && total_spent > budget_amount
}
