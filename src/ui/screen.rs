//! Screen model: everything the terminal frame shows, mutated through [`View`].

use crate::state::pagination::PaginationUi;
use crate::state::types::{Card, Language};
use crate::ui::view::View;

/// Braille spinner frames used while busy.
pub const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Content of the card area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body {
    /// Card list (possibly empty).
    Cards(Vec<Card>),
    /// Load failure message shown instead of the cards.
    Error(String),
}

impl Default for Body {
    fn default() -> Self {
        Self::Cards(Vec::new())
    }
}

/// Display state of the terminal UI.
#[derive(Clone, Debug, Default)]
pub struct Screen {
    /// Busy indicator text, `None` when idle.
    pub busy: Option<String>,
    /// Card area content.
    pub body: Body,
    /// Pagination controls.
    pub pagination: PaginationUi,
    /// Highlighted language tab.
    pub active_language: Language,
    /// Index of the highlighted card.
    pub selected: usize,
    /// Current spinner frame index.
    pub spinner_frame: usize,
}

impl Screen {
    /// Cards currently displayed (empty while an error is shown).
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match &self.body {
            Body::Cards(cards) => cards,
            Body::Error(_) => &[],
        }
    }

    /// Error message currently displayed, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.body {
            Body::Error(msg) => Some(msg),
            Body::Cards(_) => None,
        }
    }

    /// Move the highlight to the next card.
    pub fn select_next(&mut self) {
        let len = self.cards().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    /// Move the highlight to the previous card.
    pub const fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Advance the spinner while busy.
    pub const fn tick(&mut self) {
        if self.busy.is_some() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    /// Spinner glyph for the current frame.
    #[must_use]
    pub const fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }
}

impl View for Screen {
    fn show_busy(&mut self, text: &str) {
        self.busy = Some(text.to_string());
        self.spinner_frame = 0;
    }

    fn hide_busy(&mut self) {
        self.busy = None;
    }

    fn replace_cards(&mut self, cards: Vec<Card>) {
        if self.selected >= cards.len() {
            self.selected = 0;
        }
        self.body = Body::Cards(cards);
    }

    fn show_error(&mut self, message: &str) {
        self.selected = 0;
        self.body = Body::Error(message.to_string());
    }

    fn update_pagination(&mut self, pagination: &PaginationUi) {
        self.pagination = pagination.clone();
    }

    fn set_active_language(&mut self, lang: Language) {
        self.active_language = lang;
    }
}
