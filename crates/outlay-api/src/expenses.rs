//! Handlers for `/expenses/` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`    | `/expenses/` | All expenses, most recent date first |
//! | `POST`   | `/expenses/` | Body: [`NewExpense`]; 201 + `budget_exceeded` flag |
//! | `GET`    | `/expenses/:id` | 404 if not found |
//! | `DELETE` | `/expenses/:id` | 204, or 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use outlay_core::{
  expense::{Expense, NewExpense},
  store::ExpenseStore,
};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /expenses/`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Expense>>, ApiError>
where
  S: ExpenseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let expenses = store
    .list_expenses()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(expenses))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /expenses/` — body: `{"date":"2025-03-15","amount":12.5,"category":"food"}`
///
/// Responds 201 with the created expense plus its at-creation `budget_exceeded`
/// flag, or 422 when the amount is not positive.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewExpense>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ExpenseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  body
    .validate()
    .map_err(|e| ApiError::Unprocessable(e.to_string()))?;

  let created = store
    .create_expense(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(created)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /expenses/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Expense>, ApiError>
where
  S: ExpenseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let expense = store
    .get_expense(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("expense {id} not found")))?;
  Ok(Json(expense))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /expenses/:id` — hard delete; deleting twice yields 404.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: ExpenseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let deleted = store
    .delete_expense(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  if deleted {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(ApiError::NotFound(format!("expense {id} not found")))
  }
}
