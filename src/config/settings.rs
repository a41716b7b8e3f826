//! Application settings and fixed constants.

use std::env;
use std::path::PathBuf;


/// AQI at or below this value counts as a clean day.
pub const CLEAN_AQI_THRESHOLD: i64 = 25;

/// Consecutive clean days needed to reach the goal.
pub const GOAL_CLEAN_DAYS: i64 = 365;

/// Coordinates for Central Delhi.
pub const DELHI_LAT: f64 = 28.644800;
pub const DELHI_LON: f64 = 77.216721;

/// Location label used in status messages.
pub const LOCATION_NAME: &str = "Central Delhi";


/// Get the default database path.
pub fn default_db_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".aqi-streak")
        .join("records.db")
}


/// Runtime configuration, enumerated from environment variables at startup.
///
/// Credentials stay `None` when unset so the offline commands (`status`,
/// `history`, `simulate`, `reset`) work without them; `run` fails early
/// with a clear message instead.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database path (`AQI_DB_PATH`).
    pub db_path: PathBuf,
    /// IQAir API credential (`IQAIR_API_KEY`).
    pub iqair_api_key: Option<String>,
    /// Publisher bearer token (`TWITTER_ACCESS_TOKEN`).
    pub twitter_access_token: Option<String>,
    /// AQI provider base URL (`IQAIR_API_BASE`).
    pub iqair_api_base: String,
    /// Publisher base URL (`TWITTER_API_BASE`).
    pub twitter_api_base: String,
}


impl Config {
    /// Load configuration from environment variables, applying defaults
    /// where a variable is absent.
    pub fn from_env() -> Self {
        Self {
            db_path: env::var("AQI_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_db_path()),
            iqair_api_key: env_opt("IQAIR_API_KEY"),
            twitter_access_token: env_opt("TWITTER_ACCESS_TOKEN"),
            iqair_api_base: env_str("IQAIR_API_BASE", "https://api.airvisual.com"),
            twitter_api_base: env_str("TWITTER_API_BASE", "https://api.twitter.com"),
        }
    }
}


fn env_opt(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}


fn env_str(name: &str, default: &str) -> String {
    env_opt(name).unwrap_or_else(|| default.to_string())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(CLEAN_AQI_THRESHOLD, 25);
        assert_eq!(GOAL_CLEAN_DAYS, 365);
        assert_eq!(LOCATION_NAME, "Central Delhi");
    }

    #[test]
    fn test_default_db_path() {
        let path = default_db_path();
        assert!(path.to_string_lossy().contains(".aqi-streak"));
        assert!(path.to_string_lossy().contains("records.db"));
    }
}
