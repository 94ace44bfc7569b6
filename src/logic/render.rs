//! Post renderer: markup stripping, excerpt truncation, and card assembly.

use ego_tree::NodeRef;
use scraper::{Html, Node};

use crate::state::translations::TranslationCache;
use crate::state::types::{Card, Language, Post};

/// Number of characters of the primary-language excerpt shown on a card.
pub const EXCERPT_CHAR_BUDGET: usize = 140;

/// Suffix appended to every truncated excerpt.
pub const ELLIPSIS: &str = "...";

/// Image shown on cards whose post has no featured media.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/640x360?text=No+Image";

/// What: Extract the plain text content of an HTML fragment.
///
/// Inputs:
/// - `html`: Rendered markup (e.g., `title.rendered`).
///
/// Output:
/// - Concatenation of every text node, entities decoded, whitespace untouched.
///
/// Details:
/// - Mirrors a DOM `textContent` read: no trimming, no block separators.
#[must_use]
pub fn strip_html(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut buf = String::with_capacity(html.len());
    collect_text(fragment.tree.root(), &mut buf);
    buf
}

/// Append every text node below `node` to `buf`, depth-first.
fn collect_text(node: NodeRef<'_, Node>, buf: &mut String) {
    if let Node::Text(text) = node.value() {
        buf.push_str(text);
        return;
    }
    for child in node.children() {
        collect_text(child, buf);
    }
}

/// What: Cut a plain-text excerpt to the card budget.
///
/// Inputs:
/// - `text`: Plain text excerpt.
///
/// Output:
/// - The first [`EXCERPT_CHAR_BUDGET`] characters followed by [`ELLIPSIS`].
///
/// Details:
/// - Counts Unicode scalar values, never splitting a character.
/// - The ellipsis is appended even when the text is shorter than the budget.
#[must_use]
pub fn truncate_excerpt(text: &str) -> String {
    let mut out: String = text.chars().take(EXCERPT_CHAR_BUDGET).collect();
    out.push_str(ELLIPSIS);
    out
}

/// What: Text sent to the translation API for one post.
///
/// Output:
/// - `"<plain title>\n<plain excerpt>"`, excerpt not truncated.
#[must_use]
pub fn translation_source(post: &Post) -> String {
    format!(
        "{}\n{}",
        strip_html(&post.title.rendered),
        strip_html(&post.excerpt.rendered)
    )
}

/// What: Build one display card per post in the requested language.
///
/// Inputs:
/// - `posts`: Posts of the current page.
/// - `lang`: Target language.
/// - `translations`: Cache consulted when `lang` is secondary.
///
/// Output:
/// - Cards in post order.
///
/// Details:
/// - A missing or empty translated field silently falls back to the primary text.
#[must_use]
pub fn render_cards(posts: &[Post], lang: Language, translations: &TranslationCache) -> Vec<Card> {
    posts
        .iter()
        .map(|post| render_card(post, lang, translations))
        .collect()
}

/// Build a single card; see [`render_cards`].
fn render_card(post: &Post, lang: Language, translations: &TranslationCache) -> Card {
    let title_en = strip_html(&post.title.rendered);
    let excerpt_en = truncate_excerpt(&strip_html(&post.excerpt.rendered));
    let cached = if lang.is_secondary() {
        translations.get(post.id)
    } else {
        None
    };
    let title = cached
        .map(|t| t.title.as_str())
        .filter(|t| !t.is_empty())
        .map_or(title_en, str::to_string);
    let excerpt = cached
        .map(|t| t.excerpt.as_str())
        .filter(|t| !t.is_empty())
        .map_or(excerpt_en, str::to_string);
    Card {
        post_id: post.id,
        title,
        excerpt,
        image_url: post
            .featured_image()
            .unwrap_or(PLACEHOLDER_IMAGE)
            .to_string(),
        link: post.link.clone(),
    }
}
