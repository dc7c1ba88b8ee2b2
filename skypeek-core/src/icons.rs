//! Maps provider weather descriptions to static icon URLs.

/// Resolve a weather description to its icon URL.
///
/// Exact, case-sensitive match only. Unknown descriptions (including case
/// variants and partial matches) resolve to the empty string, which the
/// view renders as an absent image.
pub fn icon_url(description: &str) -> &'static str {
    match description {
        "clear sky" => "http://openweathermap.org/img/wn/01d@2x.png",
        "few clouds" => "http://openweathermap.org/img/wn/02d@2x.png",
        "scattered clouds" => "http://openweathermap.org/img/wn/03d@2x.png",
        "broken clouds" | "overcast clouds" => "http://openweathermap.org/img/wn/04d@2x.png",
        "shower rain" => "http://openweathermap.org/img/wn/09d@2x.png",
        "rain" => "http://openweathermap.org/img/wn/10d@2x.png",
        "thunderstorm" => "http://openweathermap.org/img/wn/11d@2x.png",
        "snow" => "http://openweathermap.org/img/wn/13d@2x.png",
        "mist" | "haze" => "http://openweathermap.org/img/wn/50d@2x.png",
        _ => "",
    }
}
