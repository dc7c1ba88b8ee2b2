//! Best-effort geolocation probe.
//!
//! There is no device geolocation capability on the command line, so the
//! probe resolves an approximate position from the caller's IP address via
//! the ip-api.com service. It runs once per session; any failure is logged
//! and swallowed so the widget keeps its default coordinates.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::model::Coordinates;

pub const DEFAULT_BASE_URL: &str = "http://ip-api.com";

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lon: f64,
}

/// One-shot position lookup. `None` means unavailable; never an error the
/// user should see.
pub async fn probe() -> Option<Coordinates> {
    probe_with_base_url(DEFAULT_BASE_URL).await
}

/// Same as [`probe`], against an alternate host. Tests point this at a
/// local mock server.
pub async fn probe_with_base_url(base_url: &str) -> Option<Coordinates> {
    match fetch_position(base_url).await {
        Ok(coords) => {
            debug!(
                lat = coords.latitude,
                lon = coords.longitude,
                "geolocation probe succeeded"
            );
            Some(coords)
        }
        Err(err) => {
            warn!(error = ?err, "geolocation unavailable, keeping default coordinates");
            None
        }
    }
}

async fn fetch_position(base_url: &str) -> Result<Coordinates> {
    let url = format!("{base_url}/json");

    let res = reqwest::get(&url)
        .await
        .context("Failed to send request to ip-api.com")?;

    let parsed: IpApiResponse = res
        .json()
        .await
        .context("Failed to parse ip-api.com response")?;

    if parsed.status != "success" {
        bail!("ip-api.com reported status '{}'", parsed.status);
    }

    Ok(Coordinates {
        latitude: parsed.lat,
        longitude: parsed.lon,
    })
}
