//! Handlers for `/budgets/` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET` | `/budgets/` | All budgets, category ascending |
//! | `PUT` | `/budgets/:category` | Body: [`UpdateBudgetBody`]; 404 if category unknown |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use outlay_core::{budget::Budget, store::ExpenseStore};
use serde::Deserialize;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /budgets/`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Budget>>, ApiError>
where
  S: ExpenseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let budgets = store
    .list_budgets()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(budgets))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `PUT /budgets/:category`.
///
/// The path segment is authoritative; the body's `category` field is accepted
/// for symmetry with budget responses but otherwise ignored.
#[derive(Debug, Deserialize)]
pub struct UpdateBudgetBody {
  #[allow(dead_code)]
  pub category: String,
  pub amount:   f64,
}

/// `PUT /budgets/:category` — body: `{"category":"food","amount":250}`
///
/// Overwrites the ceiling for an existing category. Never creates a new
/// category: an unknown key yields 404.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(category): Path<String>,
  Json(body): Json<UpdateBudgetBody>,
) -> Result<Json<Budget>, ApiError>
where
  S: ExpenseStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let updated = store
    .update_budget(&category, body.amount)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| {
      ApiError::NotFound(format!("budget category {category:?} not found"))
    })?;
  Ok(Json(updated))
}
