use anyhow::anyhow;
use rand::seq::SliceRandom;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::{
    flags,
    model::{Coordinates, WeatherReport},
};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Shortlist for the automatic fetch issued before the first user action.
pub const STARTUP_CITIES: [&str; 5] = ["London", "New York", "Paris", "Tokyo", "Sydney"];

/// Pick a startup city uniformly at random.
pub fn random_startup_city() -> &'static str {
    STARTUP_CITIES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(STARTUP_CITIES[0])
}

/// Outcome taxonomy for a single fetch attempt. The `Display` impl carries
/// the exact user-facing message; root causes of transport failures are
/// logged, never shown.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The query was empty after trimming; no request was issued.
    #[error("Please enter a city name")]
    EmptyQuery,
    /// The provider answered but reported a failure in the response body.
    #[error("{0}")]
    Provider(String),
    /// The request could not be sent, or the body could not be decoded.
    #[error("Failed to fetch weather data. Please try again later.")]
    Transport(anyhow::Error),
}

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the client at an alternate host. Tests use this to target a
    /// local mock server.
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    /// Look up current weather by city name via the `find` endpoint.
    ///
    /// Success is decided by the `cod` field in the response body, not the
    /// HTTP status; error bodies arrive with their own `cod`/`message`
    /// pair. Temperatures on this endpoint are Kelvin regardless of the
    /// requested units.
    pub async fn search_by_name(&self, city: &str) -> Result<WeatherReport, FetchError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(FetchError::EmptyQuery);
        }

        let url = format!("{}/data/2.5/find", self.base_url);
        let body = self
            .get_body(
                &url,
                &[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")],
            )
            .await?;

        let parsed: FindResponse = serde_json::from_str(&body).map_err(|e| {
            transport(anyhow::Error::new(e).context("Failed to parse city lookup JSON"))
        })?;

        if !parsed.cod.is_success() {
            let message = parsed
                .message
                .unwrap_or_else(|| "Unknown provider error".to_string());
            debug!(code = %parsed.cod, %message, "provider rejected city lookup");
            return Err(FetchError::Provider(message));
        }

        let entry = parsed
            .list
            .into_iter()
            .next()
            .ok_or_else(|| transport(anyhow!("city lookup response contained no matches")))?;

        let description = entry
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .unwrap_or_default();

        Ok(WeatherReport {
            temperature: format_temperature(entry.main.temp - 273.15),
            humidity: format!("{}%", entry.main.humidity),
            wind_speed: format!("{}m/s", entry.wind.speed),
            location: Some(entry.name),
            description,
            flag_url: flags::flag_url(&entry.sys.country),
        })
    }

    /// Look up current weather for a coordinate pair via the `onecall`
    /// endpoint. Values arrive already in metric units; there is no
    /// location name or country on this path.
    pub async fn search_by_coordinates(
        &self,
        coords: Coordinates,
    ) -> Result<WeatherReport, FetchError> {
        let url = format!("{}/data/2.5/onecall", self.base_url);
        let lat = coords.latitude.to_string();
        let lon = coords.longitude.to_string();
        let body = self
            .get_body(
                &url,
                &[
                    ("lat", lat.as_str()),
                    ("lon", lon.as_str()),
                    ("units", "metric"),
                    ("appid", self.api_key.as_str()),
                ],
            )
            .await?;

        // This endpoint has no success envelope; anything that does not
        // match the expected shape counts as a transport failure.
        let parsed: OneCallResponse = serde_json::from_str(&body).map_err(|e| {
            transport(anyhow::Error::new(e).context("Failed to parse coordinate lookup JSON"))
        })?;

        let description = parsed
            .current
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .unwrap_or_default();

        Ok(WeatherReport {
            temperature: format_temperature(parsed.current.temp),
            humidity: format!("{}%", parsed.current.humidity),
            wind_speed: format!("{}m/s", parsed.current.wind_speed),
            location: None,
            description,
            flag_url: None,
        })
    }

    async fn get_body(&self, url: &str, query: &[(&str, &str)]) -> Result<String, FetchError> {
        let res = self.http.get(url).query(query).send().await.map_err(|e| {
            transport(anyhow::Error::new(e).context("Failed to send request to OpenWeather"))
        })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            transport(anyhow::Error::new(e).context("Failed to read OpenWeather response body"))
        })?;

        debug!(%status, body = %truncate_body(&body), "OpenWeather responded");
        Ok(body)
    }
}

fn transport(err: anyhow::Error) -> FetchError {
    error!(error = ?err, "weather fetch failed");
    FetchError::Transport(err)
}

fn format_temperature(celsius: f64) -> String {
    // Half-degrees round away from zero, so -0.5 displays as "-1°C".
    format!("{}°C", celsius.round() as i64)
}

/// The `find` endpoint reports `cod` as a string on success and as either
/// a string or a number on failure.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Cod {
    Num(i64),
    Text(String),
}

impl Cod {
    fn is_success(&self) -> bool {
        match self {
            Cod::Num(n) => *n == 200,
            Cod::Text(s) => s == "200",
        }
    }
}

impl std::fmt::Display for Cod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cod::Num(n) => write!(f, "{n}"),
            Cod::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FindMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct FindWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct FindWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct FindSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct FindEntry {
    name: String,
    main: FindMain,
    wind: FindWind,
    weather: Vec<FindWeather>,
    sys: FindSys,
}

#[derive(Debug, Deserialize)]
struct FindResponse {
    cod: Cod,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    list: Vec<FindEntry>,
}

#[derive(Debug, Deserialize)]
struct OneCallCurrent {
    temp: f64,
    humidity: u8,
    wind_speed: f64,
    weather: Vec<FindWeather>,
}

#[derive(Debug, Deserialize)]
struct OneCallResponse {
    current: OneCallCurrent,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_rounds_to_nearest_integer() {
        assert_eq!(format_temperature(295.15 - 273.15), "22°C");
        assert_eq!(format_temperature(21.5), "22°C");
        assert_eq!(format_temperature(-0.4), "0°C");
        assert_eq!(format_temperature(-5.6), "-6°C");
    }

    #[test]
    fn half_degrees_round_away_from_zero() {
        assert_eq!(format_temperature(0.5), "1°C");
        assert_eq!(format_temperature(-0.5), "-1°C");
        assert_eq!(format_temperature(-22.5), "-23°C");
    }

    #[test]
    fn startup_city_comes_from_the_shortlist() {
        for _ in 0..50 {
            let city = random_startup_city();
            assert!(STARTUP_CITIES.contains(&city));
        }
    }

    #[test]
    fn cod_accepts_string_and_number() {
        let ok: Cod = serde_json::from_str("\"200\"").unwrap();
        assert!(ok.is_success());

        let ok: Cod = serde_json::from_str("200").unwrap();
        assert!(ok.is_success());

        let not_found: Cod = serde_json::from_str("\"404\"").unwrap();
        assert!(!not_found.is_success());
        assert_eq!(not_found.to_string(), "404");
    }

    #[test]
    fn fetch_error_messages_are_user_facing() {
        assert_eq!(FetchError::EmptyQuery.to_string(), "Please enter a city name");
        assert_eq!(
            FetchError::Provider("city not found".into()).to_string(),
            "city not found"
        );
        assert_eq!(
            FetchError::Transport(anyhow!("connection refused")).to_string(),
            "Failed to fetch weather data. Please try again later."
        );
    }
}
