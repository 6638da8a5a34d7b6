//! Core types and trait definitions for the Outlay expense tracker.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod budget;
pub mod error;
pub mod expense;
pub mod stats;
pub mod store;

pub use error::{Error, Result};
