//! Terminal rendering of session state.
//!
//! The original showed an icon image and recolored the window background;
//! here the icon becomes a glyph and the background a named color line.

use skycast_core::session::{ForecastState, Session};

/// Print the full current-conditions block: icon, labels, background.
pub fn print_weather(session: &Session) {
    let (Some(weather), Some(condition)) = (session.weather_text(), session.condition_text())
    else {
        return;
    };

    if let Some(icon) = session.icon() {
        println!("  {}", icon.glyph());
    }
    println!("{weather}");
    println!("{condition}");
    if let Some(background) = session.background() {
        println!("Background: {}", background.name());
    }
}

/// Print the forecast block, one bullet per period.
pub fn print_forecast(session: &Session) {
    println!("Forecast:");
    match session.forecast() {
        ForecastState::Empty => {}
        ForecastState::Unavailable => println!("  Unable to fetch forecast."),
        ForecastState::Ready(entries) => {
            for entry in entries {
                println!(
                    "  • {} - {} - {}",
                    entry.temperature.format(session.unit()),
                    entry.condition,
                    entry.timestamp,
                );
            }
        }
    }
}

/// Print the search history, newest first.
pub fn print_history(session: &Session) {
    if session.history().is_empty() {
        return;
    }
    println!("Search history:");
    for entry in session.history().entries() {
        println!("  • {}", entry.rendered());
    }
}
