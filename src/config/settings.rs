use std::path::Path;

use crate::state::session::DEFAULT_PER_PAGE;
use crate::state::types::Language;
use crate::util::config::parse_key_value;

/// Default WordPress posts endpoint.
pub const DEFAULT_CONTENT_ENDPOINT: &str = "https://shivjhawebtech.online/wp-json/wp/v2/posts";
/// Default MyMemory translation endpoint.
pub const DEFAULT_TRANSLATE_ENDPOINT: &str = "https://api.mymemory.translated.net/get";
/// Largest page size the WordPress API accepts.
pub const MAX_PER_PAGE: u32 = 100;

/// User-configurable settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// WordPress posts endpoint.
    pub content_endpoint: String,
    /// Translation endpoint.
    pub translate_endpoint: String,
    /// Posts per page, within `1..=MAX_PER_PAGE`.
    pub per_page: u32,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Total request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Language selected once the first page has loaded.
    pub default_language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            content_endpoint: DEFAULT_CONTENT_ENDPOINT.to_string(),
            translate_endpoint: DEFAULT_TRANSLATE_ENDPOINT.to_string(),
            per_page: DEFAULT_PER_PAGE,
            connect_timeout_secs: 15,
            request_timeout_secs: 30,
            default_language: Language::English,
        }
    }
}

impl Settings {
    /// Clamp a page size into the accepted range.
    #[must_use]
    pub fn clamp_per_page(per_page: u32) -> u32 {
        per_page.clamp(1, MAX_PER_PAGE)
    }
}

/// What: Parse `settings.conf` content on top of the defaults.
///
/// Details:
/// - Unknown keys and unparsable values are ignored with a debug log.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        let Some((key, val)) = parse_key_value(line) else {
            continue;
        };
        match key.as_str() {
            "content_endpoint" | "endpoint" if !val.is_empty() => out.content_endpoint = val,
            "translate_endpoint" if !val.is_empty() => out.translate_endpoint = val,
            "per_page" => match val.parse::<u32>() {
                Ok(n) => out.per_page = Settings::clamp_per_page(n),
                Err(_) => tracing::debug!(value = %val, "ignoring invalid per_page"),
            },
            "connect_timeout_secs" | "connect_timeout" => match val.parse::<u64>() {
                Ok(n) if n > 0 => out.connect_timeout_secs = n,
                _ => tracing::debug!(value = %val, "ignoring invalid connect timeout"),
            },
            "request_timeout_secs" | "request_timeout" => match val.parse::<u64>() {
                Ok(n) if n > 0 => out.request_timeout_secs = n,
                _ => tracing::debug!(value = %val, "ignoring invalid request timeout"),
            },
            "default_language" | "language" => match Language::from_code(&val) {
                Some(lang) => out.default_language = lang,
                None => tracing::debug!(value = %val, "ignoring unknown language"),
            },
            _ => tracing::debug!(key = %key, "ignoring unknown settings key"),
        }
    }
    out
}

/// What: Load settings from `path`, or defaults when it is absent or unreadable.
#[must_use]
pub fn load_settings(path: Option<&Path>) -> Settings {
    let Some(path) = path else {
        return Settings::default();
    };
    match std::fs::read_to_string(path) {
        Ok(content) => {
            tracing::debug!(path = %path.display(), "loaded settings file");
            parse_settings(&content)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_file_overrides_defaults() {
        let s = parse_settings(
            "# postdeck\n\
             content-endpoint = https://example.org/wp-json/wp/v2/posts\n\
             Per.Page = 500\n\
             request_timeout_secs = 0\n\
             default_language = hi # after first load\n\
             colour = blue\n",
        );
        assert_eq!(s.content_endpoint, "https://example.org/wp-json/wp/v2/posts");
        assert_eq!(s.per_page, MAX_PER_PAGE);
        assert_eq!(s.request_timeout_secs, 30);
        assert_eq!(s.translate_endpoint, DEFAULT_TRANSLATE_ENDPOINT);
        assert_eq!(s.default_language, Language::Hindi);
    }

    #[test]
    fn empty_content_yields_defaults() {
        assert_eq!(parse_settings(""), Settings::default());
        assert_eq!(load_settings(None), Settings::default());
    }
}
