use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::WeatherError,
    model::{ForecastEntry, WeatherSnapshot},
};

pub mod openweather;

pub use openweather::OpenWeatherClient;

/// Seam between the session and the remote weather service.
///
/// `fetch_current` and `fetch_forecast` are two separate calls on purpose: a
/// lookup performs them back to back, and a forecast failure must degrade
/// without discarding the current-conditions result.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_current(&self, city: &str) -> Result<WeatherSnapshot, WeatherError>;

    async fn fetch_forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, WeatherError>;
}
