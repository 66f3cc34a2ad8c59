//! Session view-model: owns all mutable display state.
//!
//! The original kept the unit flag, labels, and history as globals mutated
//! from UI callbacks. Here a single [`Session`] owns the provider, the last
//! snapshot, the forecast, the history, and the unit flag, and every
//! operation goes through `&mut self`. That also settles the in-flight
//! overlap question: a second lookup cannot start until the first returns,
//! because the caller holds the one mutable borrow for the whole await.

use chrono::Local;
use tracing::{debug, warn};

use crate::{
    classify::{Background, Category, Icon},
    error::WeatherError,
    history::HistoryStore,
    model::{ForecastEntry, WeatherSnapshot},
    provider::WeatherProvider,
    units::Unit,
};

/// Forecast display state. A forecast failure never blocks the primary
/// weather display; it degrades to `Unavailable`.
#[derive(Debug, Clone, Default)]
pub enum ForecastState {
    #[default]
    Empty,
    Ready(Vec<ForecastEntry>),
    Unavailable,
}

#[derive(Debug)]
pub struct Session {
    provider: Box<dyn WeatherProvider>,
    snapshot: Option<WeatherSnapshot>,
    forecast: ForecastState,
    history: HistoryStore,
    unit: Unit,
}

impl Session {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self {
            provider,
            snapshot: None,
            forecast: ForecastState::default(),
            history: HistoryStore::new(),
            unit: Unit::Celsius,
        }
    }

    /// Look up current conditions and forecast for a city.
    ///
    /// An empty or whitespace-only city is rejected before any network call.
    /// A current-weather failure propagates to the caller; a forecast failure
    /// is logged and degrades the forecast state instead. On success the
    /// search is recorded in the history with the local HH:mm clock.
    pub async fn lookup(&mut self, city: &str) -> Result<&WeatherSnapshot, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::Input);
        }

        let snapshot = self.provider.fetch_current(city).await?;

        self.forecast = match self.provider.fetch_forecast(city).await {
            Ok(entries) => ForecastState::Ready(entries),
            Err(err) => {
                warn!(%city, error = %err, "forecast fetch failed, degrading");
                ForecastState::Unavailable
            }
        };

        let time = Local::now().format("%H:%M").to_string();
        self.history.record(city, time);

        Ok(self.snapshot.insert(snapshot))
    }

    /// Re-run a lookup for a remembered search, by history index
    /// (0 = most recent).
    pub async fn lookup_history(&mut self, index: usize) -> Result<&WeatherSnapshot, WeatherError> {
        let city = self
            .history
            .get(index)
            .map(|entry| entry.city.clone())
            .ok_or(WeatherError::Input)?;

        self.lookup(&city).await
    }

    /// Flip between Celsius and Fahrenheit. With nothing on display this is
    /// a silent no-op; the displayed value is always re-derived from the
    /// canonical Celsius reading, so toggling never accumulates rounding
    /// error.
    pub fn toggle_unit(&mut self) {
        self.unit = self.unit.toggled();
        if self.snapshot.is_none() {
            debug!("unit toggled with no weather on display");
        }
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn forecast(&self) -> &ForecastState {
        &self.forecast
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// The three-line conditions label, matching the original layout:
    /// temperature, humidity, wind.
    pub fn weather_text(&self) -> Option<String> {
        self.snapshot.as_ref().map(|snap| {
            format!(
                "Temperature: {}\nHumidity: {}%\nWind: {:.1} m/s",
                snap.temperature.format(self.unit),
                snap.humidity_pct,
                snap.wind_speed_mps,
            )
        })
    }

    pub fn condition_text(&self) -> Option<String> {
        self.snapshot.as_ref().map(|snap| format!("Condition: {}", snap.condition))
    }

    pub fn icon(&self) -> Option<Icon> {
        self.snapshot.as_ref().map(|snap| Category::from_condition(&snap.condition).icon())
    }

    pub fn background(&self) -> Option<Background> {
        self.snapshot.as_ref().map(|snap| Category::from_condition(&snap.condition).background())
    }
}
