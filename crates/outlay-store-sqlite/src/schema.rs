//! SQL schema for the Outlay SQLite store.
//!
//! Executed once when a store is opened, before any request is served.
//! Idempotent: tables use `CREATE TABLE IF NOT EXISTS` and the category seed
//! uses `INSERT OR IGNORE`, so reopening an existing file is a no-op.

/// Full schema DDL.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS expenses (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    date        TEXT NOT NULL,     -- ISO 8601 calendar date (YYYY-MM-DD)
    amount      REAL NOT NULL,
    category    TEXT NOT NULL,     -- not a foreign key; orphans are allowed
    description TEXT
);

CREATE TABLE IF NOT EXISTS budgets (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    category TEXT NOT NULL UNIQUE,
    amount   REAL NOT NULL
);

CREATE INDEX IF NOT EXISTS expenses_date_idx     ON expenses(date);
CREATE INDEX IF NOT EXISTS expenses_category_idx ON expenses(category);

PRAGMA user_version = 1;
";

/// Seed one canonical category with a zero (disabled) ceiling.
pub const SEED_CATEGORY: &str =
  "INSERT OR IGNORE INTO budgets (category, amount) VALUES (?1, 0.0)";
