//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use std::collections::HashMap;
use url::Url;

/// Length of the shareable event code
pub const EVENT_CODE_LEN: usize = 16;

/// Generate a random alphanumeric event code
///
/// The code is the only externally-facing handle for an event and is
/// generated once at event creation.
pub fn generate_event_code() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                            abcdefghijklmnopqrstuvwxyz\
                            0123456789";
    let mut rng = rand::thread_rng();

    (0..EVENT_CODE_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Check whether a string has the shape of an event code
pub fn is_event_code(text: &str) -> bool {
    regex::Regex::new(r"^[A-Za-z0-9]{16}$")
        .map(|pattern| pattern.is_match(text))
        .unwrap_or(false)
}

/// Build a web-app URL with query parameters
pub fn build_web_app_url(base_url: &str, params: &HashMap<String, String>) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base_url)?;
    {
        let mut pairs = url.query_pairs_mut();
        let mut sorted: Vec<_> = params.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));
        for (key, value) in sorted {
            pairs.append_pair(key, value);
        }
    }
    Ok(url)
}

/// Escape HTML special characters for Telegram HTML parse mode
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Percent-encode a value for use in a raw query string
pub fn encode_query_value(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_event_code() {
        let code = generate_event_code();
        assert_eq!(code.len(), EVENT_CODE_LEN);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(is_event_code(&code));
    }

    #[test]
    fn test_event_codes_are_unique_enough() {
        let a = generate_event_code();
        let b = generate_event_code();
        assert_ne!(a, b);
    }

    #[test]
    fn test_is_event_code_rejects_bad_shapes() {
        assert!(!is_event_code("short"));
        assert!(!is_event_code("ABCD1234EFGH567!"));
        assert!(!is_event_code("ABCD1234EFGH56789"));
        assert!(is_event_code("ABCD1234EFGH5678"));
    }

    #[test]
    fn test_build_web_app_url() {
        let mut params = HashMap::new();
        params.insert("event_id".to_string(), "ABCD1234EFGH5678".to_string());
        params.insert("event_name".to_string(), "team offsite".to_string());

        let url = build_web_app_url("https://example.com/dragselector/", &params).unwrap();
        assert!(url.as_str().contains("event_id=ABCD1234EFGH5678"));
        assert!(url.as_str().contains("event_name=team+offsite"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>&"), "&lt;b&gt;&amp;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_encode_query_value() {
        assert_eq!(encode_query_value("a b"), "a%20b");
    }
}
