//! Presentation seam between the session logic and whatever displays it.

use crate::state::pagination::PaginationUi;
use crate::state::types::{Card, Language};

/// Typed display operations the session drives.
///
/// The terminal [`Screen`](crate::ui::screen::Screen) implements this; tests and
/// print mode reuse the same implementation.
pub trait View {
    /// Show the busy indicator with `text`.
    fn show_busy(&mut self, text: &str);
    /// Hide the busy indicator.
    fn hide_busy(&mut self);
    /// Replace the whole card list.
    fn replace_cards(&mut self, cards: Vec<Card>);
    /// Replace the card area with an error message.
    fn show_error(&mut self, message: &str);
    /// Update prev/next enablement, page info, and visibility.
    fn update_pagination(&mut self, pagination: &PaginationUi);
    /// Mark `lang` as the active language control.
    fn set_active_language(&mut self, lang: Language);
}
