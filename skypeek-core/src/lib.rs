//! Core library for the `skypeek` weather widget.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather client and display-model normalization
//! - Icon/flag resolution and the shared view state
//!
//! It is used by `skypeek-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod flags;
pub mod icons;
pub mod location;
pub mod model;
pub mod state;

pub use client::{FetchError, OpenWeatherClient, STARTUP_CITIES, random_startup_city};
pub use config::Config;
pub use model::{Coordinates, WeatherReport};
pub use state::WidgetState;
