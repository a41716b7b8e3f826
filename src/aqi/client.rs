//! Blocking HTTP client for the IQAir nearest-city endpoint.
//!
//! The task runs as a short-lived sequential pipeline, so the client uses
//! `reqwest::blocking` rather than an async runtime.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;


/// Failures while fetching the current reading. All of them abort the run
/// without writing anything; the next scheduled run tries again.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("AQI request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AQI provider returned status \"{0}\"")]
    Api(String),

    #[error("AQI response has no current pollution data")]
    MissingData,
}


// ── API response types (matching the IQAir nearest_city JSON) ──

#[derive(Debug, Deserialize)]
struct NearestCityResponse {
    status: String,
    #[serde(default)]
    data: Option<CityData>,
}

#[derive(Debug, Deserialize)]
struct CityData {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    pollution: Pollution,
}

#[derive(Debug, Deserialize)]
struct Pollution {
    aqius: i64,
}


/// Reusable blocking client bound to one set of coordinates.
pub struct AqiClient {
    client: reqwest::blocking::Client,
    base: String,
    api_key: String,
    lat: f64,
    lon: f64,
}


impl AqiClient {
    pub fn new(base: &str, api_key: &str, lat: f64, lon: f64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());

        Self {
            client,
            base: base.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            lat,
            lon,
        }
    }

    /// Fetch the current US AQI for the configured coordinates.
    pub fn current_aqi(&self) -> Result<i64, FetchError> {
        let url = format!("{}/v2/nearest_city", self.base);
        let resp = self
            .client
            .get(&url)
            .query(&[
                ("lat", self.lat.to_string()),
                ("lon", self.lon.to_string()),
                ("key", self.api_key.clone()),
            ])
            .send()?
            .error_for_status()?;

        let body: NearestCityResponse = resp.json()?;
        parse_reading(body)
    }
}


impl crate::task::AqiProvider for AqiClient {
    fn current_aqi(&self) -> Result<i64, FetchError> {
        AqiClient::current_aqi(self)
    }
}


fn parse_reading(body: NearestCityResponse) -> Result<i64, FetchError> {
    if body.status != "success" {
        return Err(FetchError::Api(body.status));
    }

    body.data
        .map(|d| d.current.pollution.aqius)
        .ok_or(FetchError::MissingData)
}
