use crate::{
    client::FetchError,
    model::{Coordinates, WeatherReport},
};

/// Shared view state, written by fetch outcomes and read by the view.
///
/// An explicit container instead of ambient globals: every mutation goes
/// through [`WidgetState::apply_fetch`] or [`WidgetState::set_coordinates`].
/// Outcomes are applied in arrival order and overwrite unconditionally, so
/// when callers overlap requests the last response to arrive wins. There is
/// no request-sequence guard; the interactive loop issues one request at a
/// time.
#[derive(Debug, Clone, Default)]
pub struct WidgetState {
    /// Latest successful report, or `None` when there is nothing to show.
    pub weather: Option<WeatherReport>,
    /// User-facing message from the latest failed attempt.
    pub error: Option<String>,
    /// Best-effort position from the geolocation probe.
    pub coords: Coordinates,
}

impl WidgetState {
    /// Fold one fetch outcome into the state.
    ///
    /// Success replaces the report and clears the error. Input and
    /// provider-reported failures set the error but keep the previous
    /// report on screen; transport failures discard it as well.
    pub fn apply_fetch(&mut self, outcome: Result<WeatherReport, FetchError>) {
        match outcome {
            Ok(report) => {
                self.weather = Some(report);
                self.error = None;
            }
            Err(err @ (FetchError::EmptyQuery | FetchError::Provider(_))) => {
                self.error = Some(err.to_string());
            }
            Err(err @ FetchError::Transport(_)) => {
                self.weather = None;
                self.error = Some(err.to_string());
            }
        }
    }

    pub fn set_coordinates(&mut self, coords: Coordinates) {
        self.coords = coords;
    }
}
