use serde::{Deserialize, Serialize};

use crate::units::Temperature;

/// The most recent current-conditions reading for a city.
///
/// Built fresh on every successful fetch and replaced wholesale by the next
/// one; never merged or mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub city: String,
    pub temperature: Temperature,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub condition: String,
}

/// One forecast period. The condition text and timestamp are carried verbatim
/// from the provider payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub temperature: Temperature,
    pub condition: String,
    pub timestamp: String,
}
