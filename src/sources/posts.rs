//! WordPress REST client for paginated posts.

use tracing::{info, warn};

use super::{ContentApi, Result};
use crate::state::types::{Post, PostPage};

/// Response header carrying the total number of pages.
pub const TOTAL_PAGES_HEADER: &str = "X-WP-TotalPages";

/// `reqwest`-backed [`ContentApi`] for a WordPress `wp/v2/posts` endpoint.
#[derive(Clone, Debug)]
pub struct WpClient {
    /// Shared HTTP client.
    http: reqwest::Client,
    /// Posts endpoint, e.g. `https://blog.example/wp-json/wp/v2/posts`.
    endpoint: String,
}

impl WpClient {
    /// What: Create a client for `endpoint` reusing `http`.
    #[must_use]
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }
}

/// What: Build the posts URL for one page.
///
/// Output:
/// - `<endpoint>?_embed&per_page=<N>&page=<P>` (joined with `&` when the endpoint
///   already carries a query string).
#[must_use]
pub fn posts_url(endpoint: &str, page: u32, per_page: u32) -> String {
    let sep = if endpoint.contains('?') { '&' } else { '?' };
    format!("{endpoint}{sep}_embed&per_page={per_page}&page={page}")
}

/// What: Interpret the `X-WP-TotalPages` header.
///
/// Inputs:
/// - `raw`: Header value, if present.
///
/// Output:
/// - Leading integer of the value; `1` when the header is absent or has no leading digits,
///   `u32::MAX` when the digits overflow.
#[must_use]
pub fn parse_total_pages(raw: Option<&str>) -> u32 {
    let Some(value) = raw else {
        return 1;
    };
    let digits: String = value
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        return 1;
    }
    digits.parse().unwrap_or(u32::MAX)
}

/// What: Decode a posts response body.
///
/// # Errors
/// - Returns `Err` when the body is not a JSON array of post objects.
pub fn parse_posts(body: &str) -> Result<Vec<Post>> {
    serde_json::from_str(body).map_err(|e| format!("Invalid posts payload: {e}").into())
}

impl ContentApi for WpClient {
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<PostPage> {
        let url = posts_url(&self.endpoint, page, per_page);
        let response = self.http.get(&url).send().await.map_err(|e| {
            warn!(error = %e, url = %url, "failed to fetch posts");
            Box::<dyn std::error::Error + Send + Sync>::from(format!("Network error: {e}"))
        })?;

        let status = response.status();
        let total_pages = parse_total_pages(
            response
                .headers()
                .get(TOTAL_PAGES_HEADER)
                .and_then(|h| h.to_str().ok()),
        );
        if !status.is_success() {
            warn!(url = %url, %status, "posts request rejected");
            return Err(format!("HTTP error: {status}").into());
        }

        let body = response.text().await.map_err(|e| {
            warn!(error = %e, url = %url, "failed to read posts body");
            Box::<dyn std::error::Error + Send + Sync>::from(format!(
                "Failed to read response: {e}"
            ))
        })?;
        let posts = parse_posts(&body)?;
        info!(page, count = posts.len(), total_pages, "fetched posts page");
        Ok(PostPage { posts, total_pages })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posts_url_embeds_media_and_paging() {
        assert_eq!(
            posts_url("https://blog.example/wp-json/wp/v2/posts", 2, 6),
            "https://blog.example/wp-json/wp/v2/posts?_embed&per_page=6&page=2"
        );
        assert_eq!(
            posts_url("https://blog.example/?rest_route=/wp/v2/posts", 1, 6),
            "https://blog.example/?rest_route=/wp/v2/posts&_embed&per_page=6&page=1"
        );
    }

    #[test]
    /// What: Header parsing follows integer-prefix semantics with a default of 1.
    fn total_pages_header_defaults_to_one() {
        assert_eq!(parse_total_pages(None), 1);
        assert_eq!(parse_total_pages(Some("3")), 3);
        assert_eq!(parse_total_pages(Some(" 12 ")), 12);
        assert_eq!(parse_total_pages(Some("4pages")), 4);
        assert_eq!(parse_total_pages(Some("")), 1);
        assert_eq!(parse_total_pages(Some("many")), 1);
        assert_eq!(parse_total_pages(Some("0")), 0);
    }

    #[test]
    fn total_pages_header_saturates_on_overflow() {
        assert_eq!(parse_total_pages(Some("4294967295")), u32::MAX);
        assert_eq!(parse_total_pages(Some("99999999999")), u32::MAX);
    }

    #[test]
    fn parse_posts_accepts_wordpress_array_and_rejects_objects() {
        let body = r#"[
            {"id": 1, "title": {"rendered": "A"}, "excerpt": {"rendered": "<p>a</p>"},
             "link": "https://blog.example/a", "status": "publish"},
            {"id": 2, "title": {"rendered": "B"}, "excerpt": {"rendered": "<p>b</p>"},
             "link": "https://blog.example/b"}
        ]"#;
        let posts = parse_posts(body).expect("array of posts");
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].link, "https://blog.example/b");

        let err = parse_posts(r#"{"code": "rest_post_invalid_page_number"}"#);
        assert!(err.is_err());
    }
}
