//! Storage layer for daily air-quality records.

mod database;

pub use database::{Database, StorageError, StoreStats};
