use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::{
    error::WeatherError,
    forecast::select_periods,
    model::{ForecastEntry, WeatherSnapshot},
    provider::WeatherProvider,
    units::Temperature,
};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Client for the OpenWeatherMap current-weather and 5-day-forecast endpoints.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    /// Build a client with the given connect/read timeout.
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, WeatherError> {
        Self::with_base_url(api_key, timeout, DEFAULT_BASE_URL)
    }

    /// Same as [`OpenWeatherClient::new`] but points at a different host.
    /// Used by tests to target a local mock server.
    pub fn with_base_url(
        api_key: String,
        timeout: Duration,
        base_url: impl Into<String>,
    ) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| WeatherError::network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { api_key, base_url: base_url.into(), http })
    }

    async fn get_json(&self, path: &str, city: &str) -> Result<String, WeatherError> {
        let url = format!("{}{path}", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .map_err(|e| WeatherError::network(format!("request to {path} failed: {e}")))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| WeatherError::network(format!("failed to read {path} body: {e}")))?;

        if !status.is_success() {
            return Err(WeatherError::network(format!(
                "{path} returned status {status}: {}",
                truncate_body(&body),
            )));
        }

        Ok(body)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

/// Forecast periods carry the same `main` object but only `temp` is read.
#[derive(Debug, Deserialize)]
struct OwForecastMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastPeriod {
    main: OwForecastMain,
    weather: Vec<OwWeather>,
    dt_txt: String,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastPeriod>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn fetch_current(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
        let body = self.get_json("/data/2.5/weather", city).await?;

        let parsed: OwCurrentResponse = serde_json::from_str(&body)
            .map_err(|e| WeatherError::parse(format!("current weather JSON: {e}")))?;

        let condition = parsed
            .weather
            .first()
            .map(|w| w.description.clone())
            .ok_or_else(|| WeatherError::parse("current weather JSON: empty `weather` array"))?;

        Ok(WeatherSnapshot {
            city: city.to_string(),
            temperature: Temperature::from_celsius(parsed.main.temp),
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
            condition,
        })
    }

    async fn fetch_forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, WeatherError> {
        let body = self.get_json("/data/2.5/forecast", city).await?;

        let parsed: OwForecastResponse = serde_json::from_str(&body)
            .map_err(|e| WeatherError::parse(format!("forecast JSON: {e}")))?;

        let entries = parsed
            .list
            .into_iter()
            .map(|period| {
                let condition = period
                    .weather
                    .first()
                    .map(|w| w.description.clone())
                    .ok_or_else(|| {
                        WeatherError::parse("forecast JSON: period with empty `weather` array")
                    })?;

                Ok(ForecastEntry {
                    temperature: Temperature::from_celsius(period.main.temp),
                    condition,
                    timestamp: period.dt_txt,
                })
            })
            .collect::<Result<Vec<_>, WeatherError>>()?;

        Ok(select_periods(entries))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Error bodies are arbitrary bytes from the provider; cut on a char
    // boundary so a multi-byte character straddling the limit cannot panic.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_bodies_alone() {
        assert_eq!(truncate_body("{}"), "{}");
    }

    #[test]
    fn truncate_clips_long_bodies() {
        let long = "x".repeat(500);
        let out = truncate_body(&long);
        assert_eq!(out.len(), 203);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn truncate_backs_off_to_a_char_boundary() {
        // Byte 200 lands inside the two-byte 'é'.
        let body = format!("{}é and more", "x".repeat(199));
        let out = truncate_body(&body);

        assert_eq!(out, format!("{}...", "x".repeat(199)));
    }

    #[test]
    fn truncate_handles_a_fully_multibyte_body() {
        let body = "é".repeat(300);
        let out = truncate_body(&body);

        assert!(out.ends_with("..."));
        assert_eq!(out.trim_end_matches('.').chars().count(), 100);
    }

    #[test]
    fn current_response_parses_expected_shape() {
        let body = r#"{
            "main": {"temp": 21.5, "humidity": 60},
            "wind": {"speed": 3.4},
            "weather": [{"description": "light rain"}]
        }"#;

        let parsed: OwCurrentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.main.temp, 21.5);
        assert_eq!(parsed.main.humidity, 60);
        assert_eq!(parsed.wind.speed, 3.4);
        assert_eq!(parsed.weather[0].description, "light rain");
    }

    #[test]
    fn current_response_requires_humidity() {
        let body = r#"{
            "main": {"temp": 21.5},
            "wind": {"speed": 3.4},
            "weather": [{"description": "light rain"}]
        }"#;

        assert!(serde_json::from_str::<OwCurrentResponse>(body).is_err());
    }

    #[test]
    fn forecast_response_parses_expected_shape() {
        let body = r#"{
            "list": [
                {"main": {"temp": 18.0}, "weather": [{"description": "few clouds"}],
                 "dt_txt": "2026-08-28 12:00:00"}
            ]
        }"#;

        let parsed: OwForecastResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.list.len(), 1);
        assert_eq!(parsed.list[0].dt_txt, "2026-08-28 12:00:00");
    }
}
