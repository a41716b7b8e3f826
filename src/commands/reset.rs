//! Reset command - delete all recorded days.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::config::Config;
use crate::storage::Database;


/// Run the reset command. Asks for a typed confirmation unless `force`.
pub fn run(force: bool) -> Result<()> {
    let cfg = Config::from_env();

    if !cfg.db_path.exists() {
        println!("\x1b[33mNo record database found at {}\x1b[0m", cfg.db_path.display());
        return Ok(());
    }

    let store = Database::open(&cfg.db_path)
        .with_context(|| format!("Failed to open database: {}", cfg.db_path.display()))?;
    let stats = store.stats()?;

    println!("\x1b[1m\x1b[36mResetting streak records\x1b[0m\n");
    println!("Database: {}", cfg.db_path.display());
    println!("Days recorded: {}", stats.total_days);

    if !force {
        println!("\n\x1b[1m\x1b[31mWARNING: This will permanently delete all recorded days!\x1b[0m");
        println!("\x1b[33mThis action cannot be undone.\x1b[0m\n");

        print!("Type 'delete' to confirm: ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if input.trim().to_lowercase() != "delete" {
            println!("\x1b[33mCancelled\x1b[0m");
            return Ok(());
        }
    }

    let deleted = store.reset()?;
    println!("\x1b[32m+ Deleted {deleted} records\x1b[0m");

    Ok(())
}
