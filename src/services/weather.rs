// src/services/weather.rs
use std::time::Duration;

use serde::Deserialize;

use crate::error::WeatherError;

const API_URL: &str = "http://api.openweathermap.org/data/2.5/weather";
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(3);

/// Current readings for a city, metric units.
#[derive(Debug, Clone, Copy)]
pub struct Conditions {
    pub temp_c: f64,
    pub humidity_pct: f64,
}

/// OpenWeather current-conditions client. Best effort: callers treat any
/// error as "no readings available" and continue.
pub struct WeatherClient {
    client: reqwest::Client,
    api_key: String,
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    pub async fn current(&self, city: &str) -> Result<Conditions, WeatherError> {
        let response = self
            .client
            .get(API_URL)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", "en"),
            ])
            .timeout(LOOKUP_TIMEOUT)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(WeatherError::Status(response.status()));
        }
        let body: WeatherBody = response.json().await?;
        Ok(Conditions {
            temp_c: body.main.temp,
            humidity_pct: body.main.humidity,
        })
    }
}

#[derive(Deserialize)]
struct WeatherBody {
    main: MainReadings,
}

#[derive(Deserialize)]
struct MainReadings {
    temp: f64,
    humidity: f64,
}
