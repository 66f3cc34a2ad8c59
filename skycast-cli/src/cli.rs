use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use inquire::{Select, Text};
use skycast_core::{Config, OpenWeatherClient, Session, Unit, units};
use tracing::debug;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather CLI over OpenWeatherMap")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store your OpenWeatherMap API key in the config file.
    Configure,

    /// Show current weather and a short forecast for a city.
    Show {
        /// City name, e.g. "Paris" or "New York".
        city: String,

        /// Display temperatures in this unit.
        #[arg(long, value_enum, default_value = "celsius")]
        unit: UnitArg,
    },

    /// Convert a temperature value between Celsius and Fahrenheit.
    Convert {
        /// Temperature value, e.g. "21.5" or "70F".
        value: String,

        /// Unit the value is expressed in.
        #[arg(long, value_enum, default_value = "celsius")]
        from: UnitArg,
    },

    /// Interactive session: search cities, toggle units, revisit history.
    Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitArg {
    Celsius,
    Fahrenheit,
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Celsius => Unit::Celsius,
            UnitArg::Fahrenheit => Unit::Fahrenheit,
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, unit } => show(&city, unit.into()).await,
            Command::Convert { value, from } => convert(&value, from.into()),
            Command::Interactive => interactive().await,
        }
    }
}

/// Build a session from on-disk config plus the environment.
fn new_session() -> anyhow::Result<Session> {
    let config = Config::load()?;
    let api_key = config.resolve_api_key()?;
    let timeout = Duration::from_secs(config.timeout_secs());

    let client = OpenWeatherClient::new(api_key, timeout)
        .context("Failed to build OpenWeatherMap client")?;

    Ok(Session::new(Box::new(client)))
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("OpenWeatherMap API key:")
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: &str, unit: Unit) -> anyhow::Result<()> {
    let mut session = new_session()?;
    if session.unit() != unit {
        session.toggle_unit();
    }

    if let Err(err) = session.lookup(city).await {
        // The real cause stays in the logs; the user gets one generic line.
        debug!(error = %err, "lookup failed");
        anyhow::bail!("{}", err.user_message());
    }

    render::print_weather(&session);
    render::print_forecast(&session);
    Ok(())
}

fn convert(value: &str, from: Unit) -> anyhow::Result<()> {
    let parsed = units::parse_value(value)?;
    let (converted, to) = units::convert(parsed, from, from.toggled());

    println!("{:.1} {} = {:.1} {}", parsed, from.symbol(), converted, to.symbol());
    Ok(())
}

const ACTION_SEARCH: &str = "Search a city";
const ACTION_TOGGLE: &str = "Toggle °C/°F";
const ACTION_QUIT: &str = "Quit";

async fn interactive() -> anyhow::Result<()> {
    let mut session = new_session()?;

    loop {
        let mut options = vec![ACTION_SEARCH.to_string(), ACTION_TOGGLE.to_string()];
        for entry in session.history().entries() {
            options.push(format!("• {}", entry.rendered()));
        }
        options.push(ACTION_QUIT.to_string());

        let choice = Select::new("What next?", options).prompt()?;

        match choice.as_str() {
            ACTION_QUIT => return Ok(()),
            ACTION_TOGGLE => {
                session.toggle_unit();
                render::print_weather(&session);
            }
            ACTION_SEARCH => {
                let city = Text::new("Enter city:").prompt()?;
                lookup_and_render(&mut session, &city).await;
            }
            picked => {
                // One of the rendered history lines; find its index again.
                let index = session
                    .history()
                    .entries()
                    .position(|e| format!("• {}", e.rendered()) == picked);
                if let Some(index) = index {
                    let city = session.history().get(index).map(|e| e.city.clone());
                    if let Some(city) = city {
                        lookup_and_render(&mut session, &city).await;
                    }
                }
            }
        }
    }
}

/// Run one lookup and print the result, collapsing any fetch failure to the
/// single generic alert line.
async fn lookup_and_render(session: &mut Session, city: &str) {
    match session.lookup(city).await {
        Ok(_) => {
            render::print_weather(session);
            render::print_forecast(session);
            render::print_history(session);
        }
        Err(err) => {
            debug!(error = %err, "lookup failed");
            eprintln!("{}", err.user_message());
        }
    }
}
