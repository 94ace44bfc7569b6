//! Session-lifetime cache of machine translated posts.

use std::collections::HashMap;

use crate::state::types::TranslationEntry;

/// Translations keyed by post identifier.
///
/// Entries are only ever added; nothing is evicted or invalidated while the
/// program runs.
#[derive(Clone, Debug, Default)]
pub struct TranslationCache {
    /// Post id -> translated title/excerpt.
    entries: HashMap<u64, TranslationEntry>,
}

impl TranslationCache {
    /// Translated entry for `post_id`, if any.
    #[must_use]
    pub fn get(&self, post_id: u64) -> Option<&TranslationEntry> {
        self.entries.get(&post_id)
    }

    /// Whether `post_id` already has an entry.
    #[must_use]
    pub fn contains(&self, post_id: u64) -> bool {
        self.entries.contains_key(&post_id)
    }

    /// Number of cached posts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// What: Store the translation of one post, replacing any earlier entry.
    pub fn insert(&mut self, post_id: u64, entry: TranslationEntry) {
        self.entries.insert(post_id, entry);
    }
}
