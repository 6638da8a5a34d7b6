//! Handler for `/stats/monthly/:year/:month`.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use outlay_core::{
  stats::{CategoryStat, validate_month},
  store::ExpenseStore,
};

use crate::error::ApiError;

/// `GET /stats/monthly/:year/:month`
///
/// One record per budget category (including zero-spend ones), ordered by
/// category. 400 when the month is outside 1..=12; the year is not
/// range-checked.
pub async fn monthly<S>(
  State(store): State<Arc<S>>,
  Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<Vec<CategoryStat>>, ApiError>
where
  S: ExpenseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  validate_month(month).map_err(|e| ApiError::BadRequest(e.to_string()))?;

  let stats = store
    .monthly_stats(year, month)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(stats))
}
