//! JSON REST API for the Outlay expense tracker.
//!
//! Exposes an axum [`Router`] backed by any
//! [`outlay_core::store::ExpenseStore`]. Transport concerns (CORS, tracing,
//! TLS) are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = outlay_api::api_router(store.clone());
//! axum::serve(listener, app).await?;
//! ```

pub mod budgets;
pub mod error;
pub mod expenses;
pub mod stats;

use std::sync::Arc;

use axum::{
  Json, Router,
  routing::{get, put},
};
use outlay_core::store::ExpenseStore;
use serde_json::{Value, json};

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type. Collection routes carry a trailing slash, matching
/// the paths the original clients call.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ExpenseStore + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/", get(welcome))
    // Expenses
    .route(
      "/expenses/",
      get(expenses::list::<S>).post(expenses::create::<S>),
    )
    .route(
      "/expenses/{id}",
      get(expenses::get_one::<S>).delete(expenses::delete_one::<S>),
    )
    // Budgets
    .route("/budgets/", get(budgets::list::<S>))
    .route("/budgets/{category}", put(budgets::update_one::<S>))
    // Aggregation
    .route("/stats/monthly/{year}/{month}", get(stats::monthly::<S>))
    .with_state(store)
}

/// `GET /` — greeting, doubles as a liveness probe for clients.
async fn welcome() -> Json<Value> {
  Json(json!({ "message": "Welcome to the Outlay expense tracker API" }))
}

// ─── Integration tests ────────────────────────────────────────────────────────
