//! Core value types shared by the fetcher, renderer, and session.

use serde::Deserialize;

/// Rendered markup field as exposed by the WordPress REST API (`{"rendered": "..."}`).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Rendered {
    /// HTML string for this field.
    #[serde(default)]
    pub rendered: String,
}

/// One entry of the embedded `wp:featuredmedia` array.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct FeaturedMedia {
    /// Direct URL of the media file, absent when the media is not public.
    #[serde(default)]
    pub source_url: Option<String>,
}

/// Subset of the `_embedded` object requested with `?_embed`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Embedded {
    /// Featured media entries; only the first one is ever displayed.
    #[serde(rename = "wp:featuredmedia", default)]
    pub featured_media: Vec<FeaturedMedia>,
}

/// A single blog post as returned by the content API.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Post {
    /// Post identifier, used as the translation cache key.
    pub id: u64,
    /// Rendered title markup.
    #[serde(default)]
    pub title: Rendered,
    /// Rendered excerpt markup.
    #[serde(default)]
    pub excerpt: Rendered,
    /// Canonical URL of the post.
    #[serde(default)]
    pub link: String,
    /// Embedded resources, present when the request carried `_embed`.
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<Embedded>,
}

impl Post {
    /// What: Resolve the featured image URL of this post.
    ///
    /// Output:
    /// - `Some(url)` from the first embedded featured-media entry, `None` otherwise.
    #[must_use]
    pub fn featured_image(&self) -> Option<&str> {
        self.embedded
            .as_ref()?
            .featured_media
            .first()?
            .source_url
            .as_deref()
    }
}

/// One page of posts plus the total page count reported by the server.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostPage {
    /// Posts of the requested page, in server order.
    pub posts: Vec<Post>,
    /// Value of the `X-WP-TotalPages` header (1 when missing).
    pub total_pages: u32,
}

/// Display language of the post cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// Primary language: the untranslated source text.
    #[default]
    English,
    /// Secondary language: machine translated on demand.
    Hindi,
}

impl Language {
    /// Every selectable language, in tab order.
    pub const ALL: [Self; 2] = [Self::English, Self::Hindi];

    /// What: Two-letter code used by the translation API and the CLI.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
        }
    }

    /// What: Locale identifier of the UI string table for this language.
    #[must_use]
    pub const fn locale(self) -> &'static str {
        match self {
            Self::English => "en-US",
            Self::Hindi => "hi-IN",
        }
    }

    /// What: Short label shown on the language tabs.
    #[must_use]
    pub const fn tab_label(self) -> &'static str {
        match self {
            Self::English => "EN",
            Self::Hindi => "हिं",
        }
    }

    /// What: Whether this language requires machine translation.
    #[must_use]
    pub const fn is_secondary(self) -> bool {
        matches!(self, Self::Hindi)
    }

    /// What: Parse a language code or locale.
    ///
    /// Inputs:
    /// - `value`: `en`, `hi`, `en-US`, `hi-IN`, `english`, `hindi` (case-insensitive)
    ///
    /// Output:
    /// - `Some(Language)` when recognised, `None` otherwise.
    #[must_use]
    pub fn from_code(value: &str) -> Option<Self> {
        let lower = value.trim().to_ascii_lowercase();
        let primary = lower.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "en" | "english" => Some(Self::English),
            "hi" | "hindi" => Some(Self::Hindi),
            _ => None,
        }
    }
}

/// Cached machine translation for one post.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslationEntry {
    /// Translated title (first line of the translated text).
    pub title: String,
    /// Translated excerpt (remaining lines of the translated text).
    pub excerpt: String,
}

/// One display card produced by the renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    /// Identifier of the post this card shows.
    pub post_id: u64,
    /// Title in the selected language (or the primary fallback).
    pub title: String,
    /// Excerpt in the selected language (or the truncated primary fallback).
    pub excerpt: String,
    /// Featured image URL or the placeholder.
    pub image_url: String,
    /// Link to the full post.
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Deserialize a post with and without embedded media.
    ///
    /// Inputs:
    /// - Two JSON objects shaped like WordPress REST responses.
    ///
    /// Output:
    /// - First resolves the media URL, second yields `None`.
    fn post_featured_image_from_embedded_media() {
        let with_media = r#"{
            "id": 7,
            "title": {"rendered": "Hello"},
            "excerpt": {"rendered": "<p>World</p>"},
            "link": "https://example.org/hello",
            "_embedded": {"wp:featuredmedia": [{"source_url": "https://example.org/a.jpg"}]}
        }"#;
        let post: Post = serde_json::from_str(with_media).expect("valid post json");
        assert_eq!(post.id, 7);
        assert_eq!(post.featured_image(), Some("https://example.org/a.jpg"));

        let without = r#"{"id": 8, "title": {"rendered": "x"}, "excerpt": {"rendered": "y"}, "link": ""}"#;
        let post: Post = serde_json::from_str(without).expect("valid post json");
        assert_eq!(post.featured_image(), None);

        let forbidden = r#"{"id": 9, "title": {"rendered": "x"}, "excerpt": {"rendered": "y"},
            "link": "", "_embedded": {"wp:featuredmedia": [{"code": "rest_forbidden"}]}}"#;
        let post: Post = serde_json::from_str(forbidden).expect("valid post json");
        assert_eq!(post.featured_image(), None);
    }

    #[test]
    fn language_codes_round_trip_through_parser() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
            assert_eq!(Language::from_code(lang.locale()), Some(lang));
        }
        assert_eq!(Language::from_code("HINDI"), Some(Language::Hindi));
        assert_eq!(Language::from_code("fr"), None);
        assert!(Language::Hindi.is_secondary());
        assert!(!Language::English.is_secondary());
    }
}
