use anyhow::Result;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, Text};
use skypeek_core::{Config, OpenWeatherClient, WidgetState, location, random_startup_city};
use tracing::warn;

use crate::view;

/// Commands recognized inside the interactive prompt.
const LOC_COMMAND: &str = ":loc";
const QUIT_COMMAND: &str = ":quit";
const PROMPT_HELP: &str = "city name to search, :loc for local weather, :quit to exit";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skypeek", version, about = "Weather lookup widget")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show current weather for a city, then exit.
    Show {
        /// City name, e.g. "Paris".
        city: String,
    },

    /// Show current weather for your approximate location, then exit.
    Locate,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { city }) => show_once(&city).await,
            Some(Command::Locate) => locate_once().await,
            None => interactive().await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()?;

    config.set_api_key(api_key);
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

fn client_from_config() -> Result<OpenWeatherClient> {
    let config = Config::load()?;
    let api_key = config.resolve_api_key()?;
    Ok(OpenWeatherClient::new(api_key))
}

async fn show_once(city: &str) -> Result<()> {
    let client = client_from_config()?;
    let mut state = WidgetState::default();

    state.apply_fetch(client.search_by_name(city).await);
    view::render(&state);
    Ok(())
}

async fn locate_once() -> Result<()> {
    let client = client_from_config()?;
    let mut state = WidgetState::default();

    if let Some(coords) = location::probe().await {
        state.set_coordinates(coords);
    }

    state.apply_fetch(client.search_by_coordinates(state.coords).await);
    view::render(&state);
    Ok(())
}

/// The widget loop: probe the location once, populate the view with a
/// random startup city, then dispatch user actions until quit.
async fn interactive() -> Result<()> {
    let client = client_from_config()?;
    let mut state = WidgetState::default();

    // The probe and the startup fetch are independent of each other.
    let (coords, startup) = tokio::join!(
        location::probe(),
        client.search_by_name(random_startup_city()),
    );

    if let Some(coords) = coords {
        state.set_coordinates(coords);
    }

    state.apply_fetch(startup);
    view::render(&state);

    loop {
        let line = match Text::new("Search:").with_help_message(PROMPT_HELP).prompt() {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => {
                warn!(error = %err, "prompt failed, leaving the widget loop");
                return Err(err.into());
            }
        };

        match line.trim() {
            QUIT_COMMAND => break,
            LOC_COMMAND => state.apply_fetch(client.search_by_coordinates(state.coords).await),
            _ => state.apply_fetch(client.search_by_name(&line).await),
        }

        view::render(&state);
    }

    Ok(())
}
