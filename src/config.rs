//! Client Configuration
//!
//! Read once at mount from `<meta name="..." content="...">` tags in
//! `index.html`. Missing or invalid values fall back to the defaults.

use log::LevelFilter;

const META_API_BASE: &str = "contact-api-base";
const META_SEARCH_DEBOUNCE: &str = "contact-search-debounce-ms";
const META_LOG_LEVEL: &str = "contact-log-level";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Prefix for `/api/...` paths; empty means same origin
    pub api_base: String,
    /// Delay between the last keystroke and the search request
    pub search_debounce_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            search_debounce_ms: 250,
            log_level: LevelFilter::Info,
        }
    }
}

impl ClientConfig {
    /// Build from any key lookup (the document's meta tags in the browser)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_base: lookup(META_API_BASE)
                .map(|base| base.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            search_debounce_ms: lookup(META_SEARCH_DEBOUNCE)
                .and_then(|ms| ms.trim().parse().ok())
                .unwrap_or(defaults.search_debounce_ms),
            log_level: lookup(META_LOG_LEVEL)
                .and_then(|level| level.trim().parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }

    pub fn from_document() -> Self {
        Self::from_lookup(meta_content)
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document.query_selector(&selector).ok()??.get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_missing() {
        assert_eq!(ClientConfig::from_lookup(|_| None), ClientConfig::default());
    }

    #[test]
    fn test_reads_all_keys() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("contact-api-base", "http://localhost:8000/"),
            ("contact-search-debounce-ms", "400"),
            ("contact-log-level", "debug"),
        ]));
        assert_eq!(config.api_base, "http://localhost:8000");
        assert_eq!(config.search_debounce_ms, 400);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("contact-search-debounce-ms", "soon"),
            ("contact-log-level", "chatty"),
        ]));
        assert_eq!(config.search_debounce_ms, 250);
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
