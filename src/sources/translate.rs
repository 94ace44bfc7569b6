//! MyMemory translation client.

use serde_json::Value;
use tracing::{debug, warn};

use super::{Result, TranslateApi};
use crate::state::types::Language;
use crate::util::percent_encode;

/// `reqwest`-backed [`TranslateApi`] for the MyMemory `get` endpoint.
#[derive(Clone, Debug)]
pub struct MyMemoryClient {
    /// Shared HTTP client.
    http: reqwest::Client,
    /// Translation endpoint, e.g. `https://api.mymemory.translated.net/get`.
    endpoint: String,
}

impl MyMemoryClient {
    /// What: Create a client for `endpoint` reusing `http`.
    #[must_use]
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }
}

/// What: Build the translation request URL.
///
/// Output:
/// - `<endpoint>?q=<percent-encoded text>&langpair=<from>|<to>`; joined with `&` when
///   the endpoint already carries a query string.
#[must_use]
pub fn translate_url(endpoint: &str, text: &str, from: Language, to: Language) -> String {
    let sep = if endpoint.contains('?') { '&' } else { '?' };
    format!(
        "{endpoint}{sep}q={}&langpair={}|{}",
        percent_encode(text),
        from.code(),
        to.code()
    )
}

/// What: Extract `responseData.translatedText` from a response body.
///
/// # Errors
/// - Returns `Err` for invalid JSON or when the field is missing or not a string.
pub fn parse_translation(body: &str) -> Result<String> {
    let v: Value = serde_json::from_str(body)?;
    v.pointer("/responseData/translatedText")
        .and_then(Value::as_str)
        .map(ToString::to_string)
        .ok_or_else(|| "translation response missing responseData.translatedText".into())
}

impl TranslateApi for MyMemoryClient {
    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String> {
        let url = translate_url(&self.endpoint, text, from, to);
        let response = self.http.get(&url).send().await.map_err(|e| {
            warn!(error = %e, "translation request failed");
            Box::<dyn std::error::Error + Send + Sync>::from(format!("Network error: {e}"))
        })?;
        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP error: {status}").into());
        }
        let body = response.text().await?;
        let translated = parse_translation(&body)?;
        debug!(chars = translated.chars().count(), "received translation");
        Ok(translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_url_encodes_text_and_sets_langpair() {
        let url = translate_url(
            "https://api.mymemory.translated.net/get",
            "Hello world\nLine two",
            Language::English,
            Language::Hindi,
        );
        assert_eq!(
            url,
            "https://api.mymemory.translated.net/get?q=Hello%20world%0ALine%20two&langpair=en|hi"
        );
    }

    #[test]
    fn translate_url_appends_to_existing_query() {
        let url = translate_url(
            "https://api.mymemory.translated.net/get?de=reader@example.org",
            "Hi",
            Language::English,
            Language::Hindi,
        );
        assert_eq!(
            url,
            "https://api.mymemory.translated.net/get?de=reader@example.org&q=Hi&langpair=en|hi"
        );
    }

    #[test]
    fn parse_translation_reads_nested_field() {
        let body = r#"{"responseData": {"translatedText": "नमस्ते\nदुनिया", "match": 1},
                       "responseStatus": 200}"#;
        assert_eq!(
            parse_translation(body).expect("translated text"),
            "नमस्ते\nदुनिया"
        );
        assert!(parse_translation(r#"{"responseData": null}"#).is_err());
        assert!(parse_translation("not json").is_err());
    }
}
