//! Table rendering for terminal output.

use comfy_table::{Cell, Table};
use outlay_core::{budget::Budget, expense::Expense, stats::CategoryStat};

pub fn expenses_table(expenses: &[Expense]) -> Table {
  let mut table = Table::new();
  table.set_header(vec!["ID", "Date", "Amount", "Category", "Description"]);
  for e in expenses {
    table.add_row(vec![
      Cell::new(e.id),
      Cell::new(e.date),
      Cell::new(format!("{:.2}", e.amount)),
      Cell::new(&e.category),
      Cell::new(e.description.as_deref().unwrap_or_default()),
    ]);
  }
  table
}

pub fn budgets_table(budgets: &[Budget]) -> Table {
  let mut table = Table::new();
  table.set_header(vec!["Category", "Monthly budget"]);
  for b in budgets {
    let ceiling = if b.amount > 0.0 {
      format!("{:.2}", b.amount)
    } else {
      "(not set)".to_string()
    };
    table.add_row(vec![Cell::new(&b.category), Cell::new(ceiling)]);
  }
  table
}

pub fn stats_table(stats: &[CategoryStat]) -> Table {
  let mut table = Table::new();
  table.set_header(vec!["Category", "Spent", "Budget", "Used"]);
  for s in stats {
    // A zero budget reports 0% by policy; mark it rather than mislead.
    let used = if s.budget > 0.0 {
      let over = if s.spent > s.budget { "  OVER" } else { "" };
      format!("{:.1}%{over}", s.percentage)
    } else {
      "-".to_string()
    };
    table.add_row(vec![
      Cell::new(&s.category),
      Cell::new(format!("{:.2}", s.spent)),
      Cell::new(format!("{:.2}", s.budget)),
      Cell::new(used),
    ]);
  }
  table
}
