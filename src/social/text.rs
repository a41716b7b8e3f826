//! Message text construction. Pure formatting, no I/O.

use crate::config::{CLEAN_AQI_THRESHOLD, GOAL_CLEAN_DAYS, LOCATION_NAME};
use crate::streak::StreakUpdate;


/// Build the daily status message.
///
/// The counter line distinguishes a clean day that starts a fresh streak
/// (previous streak zero) from one that extends an existing streak; the
/// distinction is wording only, the stored streak is 1 either way.
pub fn status_text(aqi: i64, previous_streak: i64, update: StreakUpdate) -> String {
    let header = format!(
        "Tweeting daily until New Delhi's AQI Reaches {CLEAN_AQI_THRESHOLD} for one year straight.\n\n"
    );

    let (status, counter) = if update.is_clean {
        let status = format!("Today's AQI in {LOCATION_NAME}: {aqi} ✨\n");
        let counter = if previous_streak == 0 {
            format!("Starting our {GOAL_CLEAN_DAYS}-day counter today! 🌟")
        } else {
            format!(
                "Clean air streak: {}/{GOAL_CLEAN_DAYS} days! 🌟",
                update.streak_days
            )
        };
        (status, counter)
    } else {
        let status = format!("Today's AQI in {LOCATION_NAME}: {aqi} 😷\n");
        let counter =
            format!("Counter reset. We need AQI ≤ {CLEAN_AQI_THRESHOLD} for a full year.");
        (status, counter)
    };

    format!("{header}{status}{counter}")
}


/// Build the fixed rules message posted as a reply under every status.
/// Does not vary by input.
pub fn rules_text() -> String {
    format!(
        "🔍 How this works:\n\n\
         1️⃣ I tweet Delhi's AQI at 9:00 AM IST daily\n\
         2️⃣ Counter starts when AQI ≤ {CLEAN_AQI_THRESHOLD}\n\
         3️⃣ Goal: {GOAL_CLEAN_DAYS} consecutive clean air days\n\
         4️⃣ Counter resets if AQI > {CLEAN_AQI_THRESHOLD}"
    )
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::streak::advance;

    #[test]
    fn test_first_clean_day_starts_the_counter() {
        let text = status_text(20, 0, advance(20, 0));

        assert!(text.starts_with("Tweeting daily until New Delhi's AQI Reaches 25"));
        assert!(text.contains("Today's AQI in Central Delhi: 20 ✨"));
        assert!(text.contains("Starting our 365-day counter today!"));
    }

    #[test]
    fn test_ongoing_streak_shows_progress() {
        let text = status_text(15, 2, advance(15, 2));

        assert!(text.contains("Today's AQI in Central Delhi: 15 ✨"));
        assert!(text.contains("Clean air streak: 3/365 days!"));
    }

    #[test]
    fn test_dirty_day_resets_the_counter() {
        let text = status_text(150, 7, advance(150, 7));

        assert!(text.contains("Today's AQI in Central Delhi: 150 😷"));
        assert!(text.contains("Counter reset. We need AQI ≤ 25 for a full year."));
        assert!(!text.contains("streak"));
    }

    #[test]
    fn test_threshold_day_reads_as_clean() {
        let text = status_text(25, 0, advance(25, 0));
        assert!(text.contains("✨"));
    }

    #[test]
    fn test_rules_are_fixed() {
        let rules = rules_text();

        assert!(rules.contains("How this works"));
        assert!(rules.contains("Counter starts when AQI ≤ 25"));
        assert!(rules.contains("Goal: 365 consecutive clean air days"));
        assert!(rules.contains("Counter resets if AQI > 25"));
        assert_eq!(rules, rules_text());
    }
}
