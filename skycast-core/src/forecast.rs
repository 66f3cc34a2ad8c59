//! Forecast period selection.

use crate::model::ForecastEntry;

/// How many forecast periods are shown.
pub const FORECAST_PERIODS: usize = 5;

/// Take the leading periods of a forecast payload, in provider order.
///
/// No sorting, no per-day deduplication, no time-of-day filtering: the first
/// `min(FORECAST_PERIODS, len)` entries are used exactly as the provider
/// returned them.
pub fn select_periods(mut entries: Vec<ForecastEntry>) -> Vec<ForecastEntry> {
    entries.truncate(FORECAST_PERIODS);
    entries
}
