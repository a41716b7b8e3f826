//! Upstream air-quality data provider.

mod client;

pub use client::{AqiClient, FetchError};
