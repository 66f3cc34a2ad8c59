//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Condition classification (icon and background tables)
//! - Temperature units and conversion
//! - Bounded search history
//! - The OpenWeatherMap client and the session view-model
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod classify;
pub mod config;
pub mod error;
pub mod forecast;
pub mod history;
pub mod model;
pub mod provider;
pub mod session;
pub mod units;

pub use classify::{Background, Category, Icon};
pub use config::Config;
pub use error::WeatherError;
pub use history::{HistoryEntry, HistoryStore};
pub use model::{ForecastEntry, WeatherSnapshot};
pub use provider::{OpenWeatherClient, WeatherProvider};
pub use session::{ForecastState, Session};
pub use units::{Temperature, Unit};
