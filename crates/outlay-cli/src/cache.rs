//! Short-lived time-based cache for API responses.
//!
//! Purely an optimisation for the dashboard refresh loop, never a source of
//! truth: an expired or missing entry means "fetch again", and a write
//! through the API invalidates the affected cell.

use std::time::{Duration, Instant};

/// A single cached value with a fixed time-to-live.
pub struct TtlCell<T> {
  ttl:   Duration,
  entry: Option<(Instant, T)>,
}

impl<T: Clone> TtlCell<T> {
  pub fn new(ttl: Duration) -> Self {
    Self { ttl, entry: None }
  }

  /// The cached value, if it is still fresh.
  pub fn get(&self) -> Option<T> {
    match &self.entry {
      Some((stored_at, value)) if stored_at.elapsed() < self.ttl => {
        Some(value.clone())
      }
      _ => None,
    }
  }

  pub fn put(&mut self, value: T) {
    self.entry = Some((Instant::now(), value));
  }

  /// Drop the cached value, forcing the next read to refetch.
  pub fn invalidate(&mut self) {
    self.entry = None;
  }
}
