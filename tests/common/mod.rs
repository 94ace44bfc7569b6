//! In-process fakes for the content and translation APIs.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use postdeck::sources::{ContentApi, Result, TranslateApi};
use postdeck::state::types::{Embedded, FeaturedMedia, Language, Post, PostPage, Rendered};

/// What: Build a post whose title is `Post <id>` and whose excerpt is `Excerpt <id>`.
///
/// Details:
/// - Even ids carry a featured image, odd ids do not.
pub fn post(id: u64) -> Post {
    let embedded = (id % 2 == 0).then(|| Embedded {
        featured_media: vec![FeaturedMedia {
            source_url: Some(format!("https://cdn.example.org/{id}.jpg")),
        }],
    });
    Post {
        id,
        title: Rendered {
            rendered: format!("Post {id}"),
        },
        excerpt: Rendered {
            rendered: format!("<p>Excerpt {id}</p>"),
        },
        link: format!("https://blog.example.org/?p={id}"),
        embedded,
    }
}

/// Content API serving fixed pages.
#[derive(Default)]
pub struct FakeContent {
    pages: HashMap<u32, Vec<u64>>,
    total_pages: u32,
    failing: HashSet<u32>,
    /// Pages requested so far, in call order.
    pub requested: Mutex<Vec<u32>>,
}

impl FakeContent {
    /// Serve `pages[i]` as page `i + 1`, reporting `pages.len()` as the total.
    pub fn new(pages: &[&[u64]]) -> Self {
        Self {
            pages: pages
                .iter()
                .enumerate()
                .map(|(i, ids)| (u32::try_from(i).expect("page index") + 1, ids.to_vec()))
                .collect(),
            total_pages: u32::try_from(pages.len()).expect("page count"),
            ..Self::default()
        }
    }

    /// Override the reported total page count.
    pub fn with_total(mut self, total_pages: u32) -> Self {
        self.total_pages = total_pages;
        self
    }

    /// Make `page` fail with an HTTP error.
    pub fn failing_on(mut self, page: u32) -> Self {
        self.failing.insert(page);
        self
    }
}

impl ContentApi for FakeContent {
    async fn fetch_page(&self, page: u32, _per_page: u32) -> Result<PostPage> {
        self.requested.lock().expect("requested lock").push(page);
        if self.failing.contains(&page) {
            return Err("HTTP error: 500 Internal Server Error".into());
        }
        let posts = self
            .pages
            .get(&page)
            .map(|ids| ids.iter().copied().map(post).collect())
            .unwrap_or_default();
        Ok(PostPage {
            posts,
            total_pages: self.total_pages,
        })
    }
}

/// Translation API that prefixes every line with `[hi] `.
#[derive(Default)]
pub struct FakeTranslator {
    fail_containing: Option<String>,
    /// Total translate calls.
    pub calls: AtomicUsize,
    in_flight: AtomicUsize,
    /// Highest number of simultaneously pending calls.
    pub max_in_flight: AtomicUsize,
}

impl FakeTranslator {
    /// Fail any request whose text contains `needle`.
    pub fn failing_on(needle: &str) -> Self {
        Self {
            fail_containing: Some(needle.to_string()),
            ..Self::default()
        }
    }

    /// Number of translate calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TranslateApi for FakeTranslator {
    async fn translate(&self, text: &str, _from: Language, to: Language) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(10)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if let Some(needle) = &self.fail_containing
            && text.contains(needle.as_str())
        {
            return Err("translation service unavailable".into());
        }
        Ok(text
            .split('\n')
            .map(|line| format!("[{}] {line}", to.code()))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
