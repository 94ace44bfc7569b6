//! Translation cache filling: deciding what to translate and applying results.

use futures::future::try_join_all;
use tracing::{debug, info};

use crate::logic::render::translation_source;
use crate::sources::{Result, TranslateApi};
use crate::state::translations::TranslationCache;
use crate::state::types::{Language, Post, TranslationEntry};

/// Text of one post waiting to be translated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslationRequest {
    /// Post the text belongs to.
    pub post_id: u64,
    /// `"<title>\n<excerpt>"` in the primary language.
    pub text: String,
}

/// What: List the posts that still lack a translation entry.
///
/// Inputs:
/// - `posts`: Posts currently loaded.
/// - `cache`: Translation cache.
///
/// Output:
/// - One request per untranslated post, in post order; empty when everything is cached.
#[must_use]
pub fn plan_missing(posts: &[Post], cache: &TranslationCache) -> Vec<TranslationRequest> {
    posts
        .iter()
        .filter(|p| !cache.contains(p.id))
        .map(|p| TranslationRequest {
            post_id: p.id,
            text: translation_source(p),
        })
        .collect()
}

/// What: Split a translated `"title\nexcerpt"` string back into its parts.
///
/// Output:
/// - Title = first line; excerpt = remaining lines joined with `\n` (empty when none).
#[must_use]
pub fn split_translation(translated: &str) -> TranslationEntry {
    let mut lines = translated.split('\n');
    let title = lines.next().unwrap_or_default().to_string();
    let excerpt = lines.collect::<Vec<_>>().join("\n");
    TranslationEntry { title, excerpt }
}

/// What: Translate a batch of posts concurrently.
///
/// Inputs:
/// - `api`: Translation backend.
/// - `requests`: Texts to translate.
/// - `target`: Target language.
///
/// Output:
/// - Translated strings in request order, or the first error.
///
/// # Errors
/// - Returns `Err` as soon as any single request fails; results that already
///   resolved are dropped with the rest of the batch.
pub async fn translate_batch<T: TranslateApi>(
    api: &T,
    requests: &[TranslationRequest],
    target: Language,
) -> Result<Vec<String>> {
    if requests.is_empty() {
        return Ok(Vec::new());
    }
    debug!(count = requests.len(), lang = target.code(), "issuing translation batch");
    let translated = try_join_all(
        requests
            .iter()
            .map(|r| api.translate(&r.text, Language::English, target)),
    )
    .await?;
    info!(count = translated.len(), lang = target.code(), "translation batch complete");
    Ok(translated)
}

/// What: Store a completed batch in the cache.
///
/// Inputs:
/// - `cache`: Cache to fill.
/// - `requests`: Requests of the batch, in the same order as `translated`.
/// - `translated`: Results returned by [`translate_batch`].
pub fn store_batch(
    cache: &mut TranslationCache,
    requests: &[TranslationRequest],
    translated: &[String],
) {
    for (request, text) in requests.iter().zip(translated) {
        cache.insert(request.post_id, split_translation(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::Rendered;

    fn post(id: u64) -> Post {
        Post {
            id,
            title: Rendered {
                rendered: format!("<h1>T{id}</h1>"),
            },
            excerpt: Rendered {
                rendered: format!("<p>E{id}</p>"),
            },
            link: String::new(),
            embedded: None,
        }
    }

    #[test]
    fn split_translation_first_line_is_title() {
        let e = split_translation("शीर्षक\nपहली पंक्ति\nदूसरी पंक्ति");
        assert_eq!(e.title, "शीर्षक");
        assert_eq!(e.excerpt, "पहली पंक्ति\nदूसरी पंक्ति");

        let single = split_translation("केवल शीर्षक");
        assert_eq!(single.title, "केवल शीर्षक");
        assert!(single.excerpt.is_empty());
    }

    #[test]
    /// What: Only uncached posts are planned, and a full cache plans nothing.
    fn plan_skips_cached_posts() {
        let posts: Vec<Post> = (1..=4).map(post).collect();
        let mut cache = TranslationCache::default();
        cache.insert(2, split_translation("a\nb"));
        let plan = plan_missing(&posts, &cache);
        assert_eq!(
            plan.iter().map(|r| r.post_id).collect::<Vec<_>>(),
            vec![1, 3, 4]
        );
        assert_eq!(plan[0].text, "T1\nE1");

        let requests = plan.clone();
        let translated: Vec<String> = requests.iter().map(|r| format!("hi:{}", r.text)).collect();
        store_batch(&mut cache, &requests, &translated);
        assert_eq!(cache.len(), 4);
        assert!(plan_missing(&posts, &cache).is_empty());
        assert_eq!(cache.get(3).map(|e| e.title.as_str()), Some("hi:T3"));
    }
}
