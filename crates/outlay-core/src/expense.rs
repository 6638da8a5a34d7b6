//! Expense types — the fundamental record of the Outlay store.
//!
//! An expense is immutable once created. There is no update operation; the
//! only mutation the store supports is permanent deletion by id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A single dated, categorised spending record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
  /// Store-assigned row id; never reused, never changes.
  pub id:          i64,
  /// Calendar date the expense occurred (no time component).
  /// Stored and exchanged as an ISO-8601 `YYYY-MM-DD` string.
  pub date:        NaiveDate,
  /// Positive monetary value in an opaque currency unit.
  pub amount:      f64,
  /// Budget category key. Not enforced against the budget table: an expense
  /// may reference a category with no budget row, in which case it is simply
  /// never reconciled against a ceiling.
  pub category:    String,
  pub description: Option<String>,
}

/// Input to [`crate::store::ExpenseStore::create_expense`].
/// `id` is always assigned by the store; it is not accepted from callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExpense {
  pub date:        NaiveDate,
  pub amount:      f64,
  pub category:    String,
  pub description: Option<String>,
}

impl NewExpense {
  /// Check that `amount` is a positive number.
  ///
  /// NaN fails the comparison and is rejected along with zero and negatives.
  pub fn validate(&self) -> Result<()> {
    if self.amount > 0.0 {
      Ok(())
    } else {
      Err(Error::NonPositiveAmount(self.amount))
    }
  }
}

/// A freshly created expense plus the at-creation-time budget check.
///
/// `budget_exceeded` reflects the category's cumulative spend for the
/// expense's month at the moment of insertion, including this record. It is
/// not stored and is never recomputed for later reads; deleting expenses
/// afterwards does not revisit it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedExpense {
  #[serde(flatten)]
  pub expense:         Expense,
  pub budget_exceeded: bool,
}
