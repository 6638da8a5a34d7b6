//! Error types for `outlay-core`.
//!
//! Absence (unknown expense id, unknown budget category) is expressed through
//! `Option`/`bool` return values on [`crate::store::ExpenseStore`]; this enum
//! covers validation failures only.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("amount must be positive, got {0}")]
  NonPositiveAmount(f64),

  #[error("month must be between 1 and 12, got {0}")]
  MonthOutOfRange(u32),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
