//! Budget types — per-category monthly spending ceilings.

use serde::{Deserialize, Serialize};

/// Categories seeded (with a zero ceiling) when a store is first initialised.
pub const DEFAULT_CATEGORIES: [&str; 6] =
  ["food", "transport", "entertainment", "household", "health", "other"];

/// A per-category monthly spending ceiling.
///
/// One row per category; budgets are never deleted, only updated in place by
/// category key. An `amount` of `0` means "no budget set" and disables
/// percentage computation for the category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
  pub id:       i64,
  /// Unique category key.
  pub category: String,
  /// Non-negative monthly ceiling; `0` disables the budget.
  pub amount:   f64,
}
