//! Status command - show the current streak and database summary.

use anyhow::{Context, Result};

use crate::config::{Config, GOAL_CLEAN_DAYS};
use crate::storage::Database;


/// Run the status command.
pub fn run() -> Result<()> {
    let cfg = Config::from_env();

    if !cfg.db_path.exists() {
        println!("No records yet. Run 'aqstreak run' to record the first day.");
        return Ok(());
    }

    let store = Database::open(&cfg.db_path)
        .with_context(|| format!("Failed to open database: {}", cfg.db_path.display()))?;

    let stats = store.stats()?;
    if stats.total_days == 0 {
        println!("No records yet. Run 'aqstreak run' to record the first day.");
        return Ok(());
    }

    let latest = store.latest()?.context("store has rows but no latest record")?;
    let progress = (latest.streak_days as f64 / GOAL_CLEAN_DAYS as f64) * 100.0;

    // Header
    println!("\n{}", "=".repeat(60));
    println!("{:^60}", "Clean Air Streak - Central Delhi");
    println!("{}\n", "=".repeat(60));

    println!("LATEST");
    println!("{}", "-".repeat(40));
    println!("  Date:                {:>15}", latest.date_key());
    println!("  AQI:                 {:>15}", latest.aqi);
    println!("  Clean day:           {:>15}", if latest.is_clean { "yes" } else { "no" });

    println!("\nSTREAK");
    println!("{}", "-".repeat(40));
    println!("  Current streak:      {:>15}", latest.streak_days);
    println!("  Goal:                {:>15}", GOAL_CLEAN_DAYS);
    println!("  Progress:            {:>14.1}%", progress);
    println!("  Best streak:         {:>15}", stats.best_streak);

    println!("\nHISTORY");
    println!("{}", "-".repeat(40));
    println!("  Days tracked:        {:>15}", stats.total_days);
    println!("  Clean days:          {:>15}", stats.clean_days);

    if let (Some(oldest), Some(newest)) = (&stats.oldest_date, &stats.newest_date) {
        println!("  Date range:          {} to {}", oldest, newest);
    }

    println!();
    Ok(())
}
