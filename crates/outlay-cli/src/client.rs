//! Async HTTP client wrapping the Outlay JSON API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use outlay_core::{
  budget::Budget,
  expense::{CreatedExpense, Expense, NewExpense},
  stats::CategoryStat,
};
use reqwest::{Client, Response};

/// Connection settings for the Outlay API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Async HTTP client for the Outlay JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based. There is no
/// retry logic anywhere: a failed request surfaces as a single error.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
  }

  /// Surface the server's `{"error": ...}` body when a request fails.
  async fn check(resp: Response, what: &str) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
      return Ok(resp);
    }
    let detail = resp
      .json::<serde_json::Value>()
      .await
      .ok()
      .and_then(|v| v["error"].as_str().map(str::to_owned))
      .unwrap_or_else(|| status.to_string());
    Err(anyhow!("{what} → {status}: {detail}"))
  }

  // ── Expenses ──────────────────────────────────────────────────────────────

  /// `POST /expenses/`
  pub async fn create_expense(
    &self,
    input: &NewExpense,
  ) -> Result<CreatedExpense> {
    let resp = self
      .client
      .post(self.url("/expenses/"))
      .json(input)
      .send()
      .await
      .context("POST /expenses/ failed")?;
    let resp = Self::check(resp, "POST /expenses/").await?;
    resp.json().await.context("deserialising created expense")
  }

  /// `GET /expenses/`
  pub async fn list_expenses(&self) -> Result<Vec<Expense>> {
    let resp = self
      .client
      .get(self.url("/expenses/"))
      .send()
      .await
      .context("GET /expenses/ failed")?;
    let resp = Self::check(resp, "GET /expenses/").await?;
    resp.json().await.context("deserialising expenses")
  }

  /// `GET /expenses/{id}`
  pub async fn get_expense(&self, id: i64) -> Result<Expense> {
    let resp = self
      .client
      .get(self.url(&format!("/expenses/{id}")))
      .send()
      .await
      .with_context(|| format!("GET /expenses/{id} failed"))?;
    let resp = Self::check(resp, "GET /expenses/{id}").await?;
    resp.json().await.context("deserialising expense")
  }

  /// `DELETE /expenses/{id}`
  pub async fn delete_expense(&self, id: i64) -> Result<()> {
    let resp = self
      .client
      .delete(self.url(&format!("/expenses/{id}")))
      .send()
      .await
      .with_context(|| format!("DELETE /expenses/{id} failed"))?;
    Self::check(resp, "DELETE /expenses/{id}").await?;
    Ok(())
  }

  // ── Budgets ───────────────────────────────────────────────────────────────

  /// `GET /budgets/`
  pub async fn list_budgets(&self) -> Result<Vec<Budget>> {
    let resp = self
      .client
      .get(self.url("/budgets/"))
      .send()
      .await
      .context("GET /budgets/ failed")?;
    let resp = Self::check(resp, "GET /budgets/").await?;
    resp.json().await.context("deserialising budgets")
  }

  /// `PUT /budgets/{category}`
  pub async fn update_budget(
    &self,
    category: &str,
    amount: f64,
  ) -> Result<Budget> {
    let resp = self
      .client
      .put(self.url(&format!("/budgets/{category}")))
      .json(&serde_json::json!({ "category": category, "amount": amount }))
      .send()
      .await
      .with_context(|| format!("PUT /budgets/{category} failed"))?;
    let resp = Self::check(resp, "PUT /budgets/{category}").await?;
    resp.json().await.context("deserialising budget")
  }

  // ── Stats ─────────────────────────────────────────────────────────────────

  /// `GET /stats/monthly/{year}/{month}`
  pub async fn monthly_stats(
    &self,
    year: i32,
    month: u32,
  ) -> Result<Vec<CategoryStat>> {
    let resp = self
      .client
      .get(self.url(&format!("/stats/monthly/{year}/{month}")))
      .send()
      .await
      .context("GET /stats/monthly failed")?;
    let resp = Self::check(resp, "GET /stats/monthly").await?;
    resp.json().await.context("deserialising stats")
  }
}
