use serde::{Deserialize, Serialize};

/// Normalized weather data shown to the user, independent of the provider
/// wire format. Replaced wholesale on each successful fetch, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Formatted temperature, e.g. `"21°C"`.
    pub temperature: String,
    /// Formatted humidity, e.g. `"63%"`.
    pub humidity: String,
    /// Formatted wind speed, e.g. `"3.1m/s"`.
    pub wind_speed: String,
    /// Resolved location name; only the city-name lookup provides one.
    pub location: Option<String>,
    /// Raw provider description, e.g. `"clear sky"`; resolved to an icon
    /// at render time.
    pub description: String,
    /// Country flag image URL; only the city-name lookup provides one.
    pub flag_url: Option<String>,
}

/// Geographic position from the geolocation probe. Stays at `{0.0, 0.0}`
/// until the probe succeeds; consumed only by the local-weather lookup.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}
