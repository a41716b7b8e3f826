//! History command - list recent daily records.

use anyhow::{Context, Result};

use crate::config::{Config, GOAL_CLEAN_DAYS};
use crate::storage::Database;


/// Run the history command.
pub fn run(days: usize) -> Result<()> {
    let cfg = Config::from_env();

    if !cfg.db_path.exists() {
        println!("No records yet. Run 'aqstreak run' to record the first day.");
        return Ok(());
    }

    let store = Database::open(&cfg.db_path)
        .with_context(|| format!("Failed to open database: {}", cfg.db_path.display()))?;

    let records = store.recent(days)?;
    if records.is_empty() {
        println!("No records yet. Run 'aqstreak run' to record the first day.");
        return Ok(());
    }

    println!("{:<12} {:>5}  {:<7} {}", "DATE", "AQI", "CLEAN", "STREAK");
    println!("{}", "-".repeat(40));

    for record in &records {
        let streak = if record.is_clean {
            format!("{}/{}", record.streak_days, GOAL_CLEAN_DAYS)
        } else {
            "reset".to_string()
        };
        println!(
            "{:<12} {:>5}  {:<7} {}",
            record.date_key(),
            record.aqi,
            if record.is_clean { "yes" } else { "no" },
            streak
        );
    }

    Ok(())
}
