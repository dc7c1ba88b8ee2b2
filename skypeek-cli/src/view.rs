//! Human-friendly output formatting for the widget state.

use skypeek_core::{WidgetState, icons};

/// Render the error banner and the weather panel. Stateless: everything
/// comes from the current [`WidgetState`], and absent pieces print nothing.
pub fn render(state: &WidgetState) {
    if let Some(error) = &state.error {
        println!("! {error}");
    }

    let Some(weather) = &state.weather else {
        return;
    };

    let icon = icons::icon_url(&weather.description);
    match (weather.description.is_empty(), icon.is_empty()) {
        (false, false) => println!("  {}  {icon}", weather.description),
        (false, true) => println!("  {}", weather.description),
        _ => {}
    }

    println!("  {}", weather.temperature);

    match (&weather.location, &weather.flag_url) {
        (Some(location), Some(flag)) => println!("  {location}  {flag}"),
        (Some(location), None) => println!("  {location}"),
        _ => {}
    }

    println!("  Humidity    {}", weather.humidity);
    println!("  Wind Speed  {}", weather.wind_speed);
}
