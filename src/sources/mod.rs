//! Remote collaborators: the WordPress content API and the translation API.
//!
//! Both are reached through small traits so the session logic can be driven by
//! in-process fakes in tests and by `reqwest` clients at runtime.

use std::time::Duration;

use crate::config::Settings;
use crate::state::types::{Language, PostPage};

mod posts;
mod translate;

pub use posts::{TOTAL_PAGES_HEADER, WpClient, parse_posts, parse_total_pages, posts_url};
pub use translate::{MyMemoryClient, parse_translation, translate_url};

/// Result type alias shared by every network-facing operation.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Source of paginated posts.
pub trait ContentApi: Send + Sync + 'static {
    /// What: Fetch one page of posts with embedded media.
    ///
    /// Inputs:
    /// - `page`: 1-based page number.
    /// - `per_page`: Page size.
    ///
    /// Output:
    /// - Posts and the total page count on success.
    ///
    /// # Errors
    /// - Network failures, non-success HTTP statuses, and malformed JSON.
    fn fetch_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> impl Future<Output = Result<PostPage>> + Send;
}

/// Machine translation backend.
pub trait TranslateApi: Send + Sync + 'static {
    /// What: Translate `text` from `from` into `to`.
    ///
    /// # Errors
    /// - Network failures and responses without a translated text.
    fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> impl Future<Output = Result<String>> + Send;
}

/// What: Build the shared HTTP client used by both API clients.
///
/// Inputs:
/// - `settings`: Provides connect and total request timeouts.
///
/// Output:
/// - Configured `reqwest::Client` with connection pooling.
///
/// # Errors
/// - Returns `Err` when the TLS backend cannot be initialised.
pub fn build_http_client(settings: &Settings) -> Result<reqwest::Client> {
    use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    let client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
        .timeout(Duration::from_secs(settings.request_timeout_secs))
        .user_agent(format!("postdeck/{}", env!("CARGO_PKG_VERSION")))
        .default_headers(headers)
        .build()?;
    Ok(client)
}
