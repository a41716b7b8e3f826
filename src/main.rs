//! AQI Streak CLI - Rust implementation
//!
//! Daily clean-air streak tracking and posting for Central Delhi.

mod aqi;
mod cli;
mod commands;
mod config;
mod models;
mod social;
mod storage;
mod streak;
mod task;

use tracing_subscriber::EnvFilter;


fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
