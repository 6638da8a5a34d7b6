//! Conversions between domain types and their SQLite column representations.

use chrono::NaiveDate;
use outlay_core::expense::Expense;

use crate::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The stored form of an expense date: ISO-8601 `YYYY-MM-DD`.
pub fn encode_date(date: NaiveDate) -> String {
  date.format(DATE_FORMAT).to_string()
}

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

/// An `expenses` row as it comes off the connection, before date parsing.
pub struct RawExpense {
  pub id:          i64,
  pub date:        String,
  pub amount:      f64,
  pub category:    String,
  pub description: Option<String>,
}

impl RawExpense {
  pub fn into_expense(self) -> Result<Expense> {
    Ok(Expense {
      id:          self.id,
      date:        decode_date(&self.date)?,
      amount:      self.amount,
      category:    self.category,
      description: self.description,
    })
  }
}
