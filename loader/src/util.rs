//! Shared helpers for dataset sources.

/// User-Agent string for HTTP requests.
pub const USER_AGENT: &str = concat!("flashdeck/", env!("CARGO_PKG_VERSION"));

/// File name the dataset extractor writes by default.
pub const DEFAULT_DATASET_NAME: &str = "cka_qa_data.json";

/// Create a configured reqwest client with standard headers.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_default()
}

/// Strip a UTF-8 byte order mark, which some editors prepend to JSON files.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{feff}[]"), "[]");
        assert_eq!(strip_bom("[]"), "[]");
        assert_eq!(strip_bom(""), "");
    }
}
