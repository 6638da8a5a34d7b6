//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::NaiveDate;
use outlay_core::{
  budget::DEFAULT_CATEGORIES,
  expense::NewExpense,
  store::ExpenseStore,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn expense(date: NaiveDate, amount: f64, category: &str) -> NewExpense {
  NewExpense {
    date,
    amount,
    category: category.into(),
    description: None,
  }
}

// ─── Expenses ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get_expense() {
  let s = store().await;

  let created = s
    .create_expense(NewExpense {
      date:        date(2025, 3, 15),
      amount:      12.5,
      category:    "food".into(),
      description: Some("groceries".into()),
    })
    .await
    .unwrap();
  assert_eq!(created.expense.amount, 12.5);
  assert!(!created.budget_exceeded);

  let fetched = s.get_expense(created.expense.id).await.unwrap();
  assert!(fetched.is_some());
  let fetched = fetched.unwrap();
  assert_eq!(fetched, created.expense);
  assert_eq!(fetched.date, date(2025, 3, 15));
  assert_eq!(fetched.description.as_deref(), Some("groceries"));
}

#[tokio::test]
async fn create_rejects_non_positive_amounts() {
  let s = store().await;

  assert!(s.create_expense(expense(date(2025, 1, 1), 0.0, "food")).await.is_err());
  assert!(s.create_expense(expense(date(2025, 1, 1), -3.0, "food")).await.is_err());

  // Smallest positive amount is accepted.
  let created = s
    .create_expense(expense(date(2025, 1, 1), 0.01, "food"))
    .await
    .unwrap();
  assert_eq!(created.expense.amount, 0.01);
}

#[tokio::test]
async fn get_expense_missing_returns_none() {
  let s = store().await;
  assert!(s.get_expense(999).await.unwrap().is_none());
}

#[tokio::test]
async fn list_expenses_orders_by_date_descending() {
  let s = store().await;
  s.create_expense(expense(date(2025, 1, 10), 1.0, "food")).await.unwrap();
  s.create_expense(expense(date(2025, 3, 5), 2.0, "food")).await.unwrap();
  s.create_expense(expense(date(2025, 2, 20), 3.0, "food")).await.unwrap();

  let all = s.list_expenses().await.unwrap();
  let dates: Vec<_> = all.iter().map(|e| e.date).collect();
  assert_eq!(
    dates,
    vec![date(2025, 3, 5), date(2025, 2, 20), date(2025, 1, 10)]
  );
}

#[tokio::test]
async fn same_date_ties_put_the_later_creation_first() {
  let s = store().await;
  let first  = s.create_expense(expense(date(2025, 6, 1), 1.0, "food")).await.unwrap();
  let second = s.create_expense(expense(date(2025, 6, 1), 2.0, "food")).await.unwrap();

  let all = s.list_expenses().await.unwrap();
  assert_eq!(all[0].id, second.expense.id);
  assert_eq!(all[1].id, first.expense.id);
}

#[tokio::test]
async fn delete_expense_removes_the_row() {
  let s = store().await;
  let created = s.create_expense(expense(date(2025, 4, 1), 9.0, "food")).await.unwrap();

  assert!(s.delete_expense(created.expense.id).await.unwrap());
  assert!(s.get_expense(created.expense.id).await.unwrap().is_none());
}

#[tokio::test]
async fn second_delete_of_same_id_reports_absence() {
  let s = store().await;
  let created = s.create_expense(expense(date(2025, 4, 1), 9.0, "food")).await.unwrap();

  assert!(s.delete_expense(created.expense.id).await.unwrap());
  assert!(!s.delete_expense(created.expense.id).await.unwrap());
}

#[tokio::test]
async fn delete_nonexistent_reports_absence() {
  let s = store().await;
  assert!(!s.delete_expense(12345).await.unwrap());
}

// ─── Budgets ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn canonical_categories_are_seeded_with_zero_ceiling() {
  let s = store().await;

  let budgets = s.list_budgets().await.unwrap();
  assert_eq!(budgets.len(), DEFAULT_CATEGORIES.len());
  assert!(budgets.iter().all(|b| b.amount == 0.0));

  // Ordered by category, ascending.
  let categories: Vec<_> = budgets.iter().map(|b| b.category.as_str()).collect();
  let mut sorted = categories.clone();
  sorted.sort_unstable();
  assert_eq!(categories, sorted);
}

#[tokio::test]
async fn reopening_a_store_does_not_duplicate_the_seed() {
  let dir  = std::env::temp_dir().join(format!("outlay-test-{}", std::process::id()));
  std::fs::create_dir_all(&dir).unwrap();
  let path = dir.join("reopen.db");
  let _ = std::fs::remove_file(&path);

  {
    let s = SqliteStore::open(&path).await.unwrap();
    s.update_budget("food", 250.0).await.unwrap();
  }

  let s = SqliteStore::open(&path).await.unwrap();
  let budgets = s.list_budgets().await.unwrap();
  assert_eq!(budgets.len(), DEFAULT_CATEGORIES.len());

  // The seed must not clobber an existing ceiling.
  let food = budgets.iter().find(|b| b.category == "food").unwrap();
  assert_eq!(food.amount, 250.0);

  std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn update_budget_overwrites_amount_in_place() {
  let s = store().await;

  let before = s.list_budgets().await.unwrap();
  let food_id = before.iter().find(|b| b.category == "food").unwrap().id;

  let updated = s.update_budget("food", 300.0).await.unwrap().unwrap();
  assert_eq!(updated.id, food_id);
  assert_eq!(updated.category, "food");
  assert_eq!(updated.amount, 300.0);

  // Other categories are untouched.
  let after = s.list_budgets().await.unwrap();
  for budget in &after {
    if budget.category == "food" {
      assert_eq!(budget.amount, 300.0);
    } else {
      assert_eq!(budget.amount, 0.0);
    }
  }
}

#[tokio::test]
async fn update_budget_unknown_category_returns_none() {
  let s = store().await;
  assert!(s.update_budget("yachts", 1000.0).await.unwrap().is_none());

  // And it must not have created a row.
  let budgets = s.list_budgets().await.unwrap();
  assert!(budgets.iter().all(|b| b.category != "yachts"));
}

// ─── Monthly stats ───────────────────────────────────────────────────────────

#[tokio::test]
async fn stats_cover_every_budget_category() {
  let s = store().await;
  s.create_expense(expense(date(2025, 5, 2), 40.0, "food")).await.unwrap();

  let stats = s.monthly_stats(2025, 5).await.unwrap();
  assert_eq!(stats.len(), DEFAULT_CATEGORIES.len());

  let food = stats.iter().find(|c| c.category == "food").unwrap();
  assert_eq!(food.spent, 40.0);
  let health = stats.iter().find(|c| c.category == "health").unwrap();
  assert_eq!(health.spent, 0.0);
  assert_eq!(health.percentage, 0.0);
}

#[tokio::test]
async fn stats_sum_only_the_requested_month() {
  let s = store().await;
  s.create_expense(expense(date(2025, 5, 1), 10.0, "food")).await.unwrap();
  s.create_expense(expense(date(2025, 5, 31), 15.0, "food")).await.unwrap();
  s.create_expense(expense(date(2025, 6, 1), 99.0, "food")).await.unwrap();
  s.create_expense(expense(date(2024, 5, 1), 99.0, "food")).await.unwrap();

  let stats = s.monthly_stats(2025, 5).await.unwrap();
  let food = stats.iter().find(|c| c.category == "food").unwrap();
  assert_eq!(food.spent, 25.0);
}

#[tokio::test]
async fn stats_percentage_uses_the_budget_ceiling() {
  let s = store().await;
  s.update_budget("food", 200.0).await.unwrap();
  s.create_expense(expense(date(2025, 5, 2), 50.0, "food")).await.unwrap();

  let stats = s.monthly_stats(2025, 5).await.unwrap();
  let food = stats.iter().find(|c| c.category == "food").unwrap();
  assert_eq!(food.budget, 200.0);
  assert_eq!(food.percentage, 25.0);
}

#[tokio::test]
async fn stats_zero_budget_reports_zero_percent() {
  let s = store().await;
  s.create_expense(expense(date(2025, 5, 2), 500.0, "food")).await.unwrap();

  let stats = s.monthly_stats(2025, 5).await.unwrap();
  let food = stats.iter().find(|c| c.category == "food").unwrap();
  assert_eq!(food.spent, 500.0);
  assert_eq!(food.percentage, 0.0);
}

#[tokio::test]
async fn stats_exclude_orphan_categories() {
  let s = store().await;
  s.create_expense(expense(date(2025, 5, 2), 75.0, "gadgets")).await.unwrap();

  let stats = s.monthly_stats(2025, 5).await.unwrap();
  assert!(stats.iter().all(|c| c.category != "gadgets"));

  // Spend total over the result only covers budgeted categories.
  let total: f64 = stats.iter().map(|c| c.spent).sum();
  assert_eq!(total, 0.0);
}

#[tokio::test]
async fn stats_month_out_of_range_fails() {
  let s = store().await;
  assert!(s.monthly_stats(2025, 0).await.is_err());
  assert!(s.monthly_stats(2025, 13).await.is_err());
  assert!(s.monthly_stats(2025, 1).await.is_ok());
  assert!(s.monthly_stats(2025, 12).await.is_ok());
}

// ─── Budget-exceeded check ───────────────────────────────────────────────────

#[tokio::test]
async fn exceeding_a_set_budget_flags_the_creation() {
  let s = store().await;
  s.update_budget("food", 100.0).await.unwrap();

  let created = s
    .create_expense(expense(date(2025, 5, 2), 120.0, "food"))
    .await
    .unwrap();
  assert!(created.budget_exceeded);
}

#[tokio::test]
async fn reaching_the_budget_exactly_is_not_exceeded() {
  let s = store().await;
  s.update_budget("food", 100.0).await.unwrap();

  let created = s
    .create_expense(expense(date(2025, 5, 2), 100.0, "food"))
    .await
    .unwrap();
  assert!(!created.budget_exceeded);
}

#[tokio::test]
async fn cumulative_spend_within_the_month_trips_the_flag() {
  let s = store().await;
  s.update_budget("food", 100.0).await.unwrap();

  let first = s.create_expense(expense(date(2025, 5, 2), 60.0, "food")).await.unwrap();
  assert!(!first.budget_exceeded);

  let second = s.create_expense(expense(date(2025, 5, 20), 60.0, "food")).await.unwrap();
  assert!(second.budget_exceeded);
}

#[tokio::test]
async fn spend_in_another_month_does_not_count() {
  let s = store().await;
  s.update_budget("food", 100.0).await.unwrap();
  s.create_expense(expense(date(2025, 4, 30), 90.0, "food")).await.unwrap();

  let created = s
    .create_expense(expense(date(2025, 5, 1), 90.0, "food"))
    .await
    .unwrap();
  assert!(!created.budget_exceeded);
}

#[tokio::test]
async fn zero_budget_never_flags() {
  let s = store().await;

  let created = s
    .create_expense(expense(date(2025, 5, 2), 120.0, "food"))
    .await
    .unwrap();
  assert!(!created.budget_exceeded);
}

#[tokio::test]
async fn orphan_category_never_flags() {
  let s = store().await;

  let created = s
    .create_expense(expense(date(2025, 5, 2), 9999.0, "gadgets"))
    .await
    .unwrap();
  assert!(!created.budget_exceeded);
}
