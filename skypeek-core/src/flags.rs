//! Country flag image lookup.

const FLAG_CDN_BASE: &str = "https://flagcdn.com/h120";

/// Resolve an ISO-3166 alpha-2 country code to a flag image URL on the
/// flagcdn.com CDN. Codes that are not exactly two ASCII letters yield
/// `None`, so a malformed provider response degrades to a missing flag
/// rather than a broken URL.
pub fn flag_url(iso2: &str) -> Option<String> {
    if iso2.len() == 2 && iso2.bytes().all(|b| b.is_ascii_alphabetic()) {
        Some(format!("{FLAG_CDN_BASE}/{}.png", iso2.to_ascii_lowercase()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes_resolve() {
        assert_eq!(flag_url("FR").as_deref(), Some("https://flagcdn.com/h120/fr.png"));
        assert_eq!(flag_url("gb").as_deref(), Some("https://flagcdn.com/h120/gb.png"));
    }

    #[test]
    fn malformed_codes_yield_none() {
        assert_eq!(flag_url(""), None);
        assert_eq!(flag_url("F"), None);
        assert_eq!(flag_url("FRA"), None);
        assert_eq!(flag_url("F1"), None);
    }
}
