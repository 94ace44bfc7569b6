//! Reader session: the single owner of posts, translations, pagination, and language.
//!
//! Network work happens elsewhere. The session hands out a [`FetchTicket`] or a
//! [`TranslationJob`] describing what to request and later applies the outcome.
//! Every ticket and job carries a sequence number; only the newest one may hide
//! the busy indicator or replace what is shown.

use tracing::{debug, info, warn};

use crate::i18n;
use crate::logic::render::render_cards;
use crate::logic::translate::{TranslationRequest, plan_missing, store_batch};
use crate::sources::Result;
use crate::state::pagination::Pagination;
use crate::state::translations::TranslationCache;
use crate::state::types::{Language, Post, PostPage};
use crate::ui::view::View;

/// Default number of posts per page.
pub const DEFAULT_PER_PAGE: u32 = 6;

/// A page fetch the session asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    /// Sequence number of the request.
    pub seq: u64,
    /// 1-based page to fetch.
    pub page: u32,
    /// Posts per page.
    pub per_page: u32,
}

/// A translation batch the session asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslationJob {
    /// Sequence number of the batch.
    pub seq: u64,
    /// Target language.
    pub target: Language,
    /// Texts to translate, one per uncached post.
    pub requests: Vec<TranslationRequest>,
}

/// Reader session state.
#[derive(Debug)]
pub struct Session {
    posts: Vec<Post>,
    cache: TranslationCache,
    pagination: Pagination,
    language: Language,
    per_page: u32,
    fetch_seq: u64,
    translate_seq: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE)
    }
}

impl Session {
    /// Create a session on page 1 in the primary language.
    #[must_use]
    pub fn new(per_page: u32) -> Self {
        Self {
            posts: Vec::new(),
            cache: TranslationCache::default(),
            pagination: Pagination::default(),
            language: Language::English,
            per_page: per_page.max(1),
            fetch_seq: 0,
            translate_seq: 0,
        }
    }

    /// Posts of the current page.
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Translation cache (read-only).
    #[must_use]
    pub const fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    /// Pagination counters.
    #[must_use]
    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Currently selected language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// What: Start loading the current page.
    ///
    /// Output:
    /// - Ticket to hand to the content worker; the loading indicator is shown.
    pub fn begin_fetch<V: View>(&mut self, view: &mut V) -> FetchTicket {
        self.fetch_seq += 1;
        view.show_busy(&i18n::t(self.language, "app.busy.loading"));
        let ticket = FetchTicket {
            seq: self.fetch_seq,
            page: self.pagination.current(),
            per_page: self.per_page,
        };
        debug!(seq = ticket.seq, page = ticket.page, "fetch requested");
        ticket
    }

    /// What: Go to the next page.
    ///
    /// Output:
    /// - Ticket for the new page, or `None` when already on the last page.
    pub fn next_page<V: View>(&mut self, view: &mut V) -> Option<FetchTicket> {
        self.pagination.advance()?;
        Some(self.begin_fetch(view))
    }

    /// What: Go to the previous page.
    ///
    /// Output:
    /// - Ticket for the new page, or `None` when already on page 1.
    pub fn prev_page<V: View>(&mut self, view: &mut V) -> Option<FetchTicket> {
        self.pagination.retreat()?;
        Some(self.begin_fetch(view))
    }

    /// What: Apply the outcome of a page fetch.
    ///
    /// Inputs:
    /// - `ticket`: Ticket returned by `begin_fetch`.
    /// - `outcome`: Parsed page or the fetch error.
    ///
    /// Output:
    /// - `true` when applied, `false` when a newer fetch superseded this one.
    ///
    /// Details:
    /// - Success replaces the posts, updates the page total, and renders the cards in
    ///   the primary language regardless of the selected language.
    /// - Failure shows the load error; posts and page total are left unchanged.
    pub fn apply_fetch<V: View>(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<PostPage>,
        view: &mut V,
    ) -> bool {
        if ticket.seq != self.fetch_seq {
            debug!(seq = ticket.seq, latest = self.fetch_seq, "discarding stale fetch");
            return false;
        }
        view.hide_busy();
        match outcome {
            Ok(page) => {
                info!(
                    page = ticket.page,
                    posts = page.posts.len(),
                    total_pages = page.total_pages,
                    "page loaded"
                );
                self.pagination.set_total(page.total_pages);
                self.posts = page.posts;
                view.replace_cards(render_cards(&self.posts, Language::English, &self.cache));
            }
            Err(e) => {
                warn!(page = ticket.page, error = %e, "failed to load posts");
                view.show_error(&i18n::t(self.language, "app.errors.load_failed"));
            }
        }
        view.update_pagination(&self.pagination.affordances());
        true
    }

    /// What: Switch the display language.
    ///
    /// Output:
    /// - A translation job when switching to a secondary language with uncached posts;
    ///   `None` when nothing needs translating (cards are rendered immediately) or the
    ///   language did not change.
    pub fn select_language<V: View>(
        &mut self,
        lang: Language,
        view: &mut V,
    ) -> Option<TranslationJob> {
        if lang == self.language {
            return None;
        }
        self.language = lang;
        view.set_active_language(lang);
        info!(lang = lang.code(), "language selected");

        if lang.is_secondary() {
            let requests = plan_missing(&self.posts, &self.cache);
            if !requests.is_empty() {
                self.translate_seq += 1;
                view.show_busy(&i18n::t(lang, "app.busy.translating"));
                debug!(seq = self.translate_seq, count = requests.len(), "translation requested");
                return Some(TranslationJob {
                    seq: self.translate_seq,
                    target: lang,
                    requests,
                });
            }
        }
        self.render(view);
        None
    }

    /// What: Apply the outcome of a translation batch.
    ///
    /// Details:
    /// - Successful batches are always cached, even when superseded.
    /// - A failed batch stores nothing.
    /// - Only the newest batch hides the busy indicator and re-renders, in whatever
    ///   language is selected at that moment.
    pub fn apply_translations<V: View>(
        &mut self,
        job: &TranslationJob,
        outcome: Result<Vec<String>>,
        view: &mut V,
    ) {
        match outcome {
            Ok(translated) => store_batch(&mut self.cache, &job.requests, &translated),
            Err(e) => warn!(
                seq = job.seq,
                count = job.requests.len(),
                error = %e,
                "translation batch failed; keeping untranslated text"
            ),
        }
        if job.seq != self.translate_seq {
            debug!(seq = job.seq, latest = self.translate_seq, "translation batch superseded");
            return;
        }
        view.hide_busy();
        self.render(view);
    }

    /// Render the current posts in the selected language.
    pub fn render<V: View>(&self, view: &mut V) {
        view.replace_cards(render_cards(&self.posts, self.language, &self.cache));
    }
}
