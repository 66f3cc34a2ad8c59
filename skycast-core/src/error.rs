use thiserror::Error;

/// Failure taxonomy for a weather lookup.
///
/// `Network` and `Parse` are deliberately indistinguishable to the end user:
/// both collapse to a single "failed to fetch" message at the CLI. The split
/// exists so callers can log the real cause and so the forecast path can
/// degrade without hiding what went wrong.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Transport-level failure: connect/read timeout or a non-200 status.
    #[error("weather request failed: {reason}")]
    Network { reason: String },

    /// The provider answered 200 but the body was not the expected JSON.
    #[error("could not parse weather response: {reason}")]
    Parse { reason: String },

    /// Empty city input, caught before any network call is made.
    #[error("no city name was given")]
    Input,

    /// A temperature value that could not be parsed as a number.
    #[error("could not parse temperature value '{input}'")]
    Conversion { input: String },
}

impl WeatherError {
    pub fn network(reason: impl Into<String>) -> Self {
        WeatherError::Network { reason: reason.into() }
    }

    pub fn parse(reason: impl Into<String>) -> Self {
        WeatherError::Parse { reason: reason.into() }
    }

    /// The one generic line shown to the user when a current-conditions
    /// fetch fails, regardless of the underlying cause.
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::Network { .. } | WeatherError::Parse { .. } => {
                "Failed to fetch weather data. Please check the city name."
            }
            WeatherError::Input => "Please enter a city name.",
            WeatherError::Conversion { .. } => "Could not convert the temperature value.",
        }
    }
}
