//! Simulate command - replay AQI values through the streak counter.
//!
//! Pure preview: no database, no network. Useful for checking what a
//! sequence of readings would do to the counter and the posted messages.

use anyhow::{Context, Result};
use chrono::{Duration, Local};

use crate::social::status_text;
use crate::streak;


/// Run the simulate command with comma-separated AQI values.
pub fn run(values: &str) -> Result<()> {
    let readings = parse_values(values)?;

    println!("\n=== AQI Streak Simulation ===");

    let start_date = Local::now().date_naive() - Duration::days(readings.len() as i64 - 1);
    let mut previous_streak = 0;

    for (i, &aqi) in readings.iter().enumerate() {
        let current_date = start_date + Duration::days(i as i64);
        let update = streak::advance(aqi, previous_streak);

        println!("\nDay {} ({}):", i + 1, current_date.format("%Y-%m-%d"));
        println!("{}", "-".repeat(50));
        println!("{}", status_text(aqi, previous_streak, update));

        previous_streak = update.streak_days;
    }

    println!("\nFinal streak: {previous_streak}");
    Ok(())
}


fn parse_values(values: &str) -> Result<Vec<i64>> {
    let readings = values
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .with_context(|| format!("Invalid AQI value: '{s}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    if readings.is_empty() {
        anyhow::bail!("No AQI values provided");
    }

    Ok(readings)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_values() {
        assert_eq!(parse_values("20, 15,30").unwrap(), vec![20, 15, 30]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_values("20,abc").is_err());
        assert!(parse_values("").is_err());
    }
}
