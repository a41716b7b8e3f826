//! Run command - the daily fetch, record, and post task.
//!
//! This is what the external scheduler invokes once per day. Exit status
//! matters to the scheduler: a missing reading and an already-recorded day
//! end the process successfully (the next run handles it), while storage
//! and publish failures are real failed runs.

use anyhow::{Context, Result};
use chrono::Local;
use tracing::warn;

use crate::aqi::AqiClient;
use crate::config::{Config, DELHI_LAT, DELHI_LON};
use crate::social::{status_text, SocialClient};
use crate::storage::Database;
use crate::streak;
use crate::task::{self, RunOutcome, TaskError};


/// Run the daily task. With `dry_run`, fetch and compute only: print the
/// would-be record and message, persist nothing, publish nothing.
pub fn run(dry_run: bool) -> Result<()> {
    let cfg = Config::from_env();
    let today = Local::now().date_naive();

    let api_key = cfg
        .iqair_api_key
        .as_deref()
        .context("IQAIR_API_KEY is not set")?;
    let provider = AqiClient::new(&cfg.iqair_api_base, api_key, DELHI_LAT, DELHI_LON);

    let store = Database::open(&cfg.db_path)
        .with_context(|| format!("Failed to open database: {}", cfg.db_path.display()))?;

    if dry_run {
        return preview(&store, &provider);
    }

    let token = cfg
        .twitter_access_token
        .as_deref()
        .context("TWITTER_ACCESS_TOKEN is not set")?;
    let publisher = SocialClient::new(&cfg.twitter_api_base, token);

    match task::run_once(&store, &provider, &publisher, today) {
        Ok(RunOutcome::Posted { record, post_id, rules_posted }) => {
            println!(
                "\x1b[32m+ Recorded {} (AQI {}, streak {})\x1b[0m",
                record.date_key(),
                record.aqi,
                record.streak_days
            );
            println!("\x1b[32m+ Posted status {}\x1b[0m", post_id.0);
            if !rules_posted {
                println!("\x1b[33mRules reply failed; status is already public\x1b[0m");
            }
            Ok(())
        }
        Ok(RunOutcome::AlreadyRecorded { date }) => {
            println!("Record for {date} already exists. Skipping...");
            Ok(())
        }
        // Transient: nothing recorded, nothing posted. The next scheduled
        // run is the retry.
        Err(TaskError::Fetch(e)) => {
            warn!(error = %e, "AQI unavailable, skipping this run");
            eprintln!("AQI unavailable, skipping this run: {e}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}


fn preview(store: &Database, provider: &AqiClient) -> Result<()> {
    let aqi = provider.current_aqi()?;
    let previous_streak = store.latest()?.map(|r| r.streak_days).unwrap_or(0);
    let update = streak::advance(aqi, previous_streak);

    println!("\x1b[1m\x1b[36mDry run - nothing will be recorded or posted\x1b[0m\n");
    println!("AQI today:       {aqi}");
    println!("Clean day:       {}", if update.is_clean { "yes" } else { "no" });
    println!("Streak would be: {}", update.streak_days);
    println!("\nStatus message:\n{}", "-".repeat(50));
    println!("{}", status_text(aqi, previous_streak, update));

    Ok(())
}
