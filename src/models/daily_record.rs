//! Record model for one day's air-quality reading.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};


/// One recorded day: the measured AQI and the derived streak state.
///
/// Records are immutable once written; the streak invariant is that
/// `streak_days` equals the previous record's `streak_days + 1` on a clean
/// day and `0` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub aqi: i64,
    pub is_clean: bool,
    pub streak_days: i64,
}


impl DailyRecord {
    /// Get date string in YYYY-MM-DD format, the database key.
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
