//! Key handling for the reader.
//!
//! Scrolling is applied to the [`Screen`] directly; everything that touches the
//! session (paging, language) is returned as an [`Action`] for the runtime.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::types::Language;
use crate::ui::screen::Screen;

/// Session-level request produced by a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Leave the application.
    Quit,
    /// Go to the next page.
    NextPage,
    /// Go to the previous page.
    PrevPage,
    /// Switch the display language.
    SelectLanguage(Language),
}

/// What: Dispatch a single terminal event.
///
/// Output:
/// - `Some(action)` when the session has work to do, `None` otherwise.
///
/// Details:
/// - Only key presses are handled; repeats and releases are ignored.
/// - `Ctrl+C` quits like `q`.
pub fn handle_event(ev: &CEvent, screen: &mut Screen) -> Option<Action> {
    let CEvent::Key(ke) = ev else {
        return None;
    };
    if ke.kind != KeyEventKind::Press {
        return None;
    }
    handle_key(*ke, screen)
}

/// Map a key press to a screen change or an [`Action`].
fn handle_key(ke: KeyEvent, screen: &mut Screen) -> Option<Action> {
    if ke.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(ke.code, KeyCode::Char('c')).then_some(Action::Quit);
    }
    match ke.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Right | KeyCode::Char('l' | 'n') => Some(Action::NextPage),
        KeyCode::Left | KeyCode::Char('h' | 'p') => Some(Action::PrevPage),
        KeyCode::Char('e') => Some(Action::SelectLanguage(Language::English)),
        KeyCode::Char('i') => Some(Action::SelectLanguage(Language::Hindi)),
        KeyCode::Down | KeyCode::Char('j') => {
            screen.select_next();
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            screen.select_prev();
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::Card;
    use crate::ui::view::View;

    fn key(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn paging_and_language_keys_map_to_actions() {
        let mut screen = Screen::default();
        assert_eq!(handle_event(&key(KeyCode::Right), &mut screen), Some(Action::NextPage));
        assert_eq!(handle_event(&key(KeyCode::Char('n')), &mut screen), Some(Action::NextPage));
        assert_eq!(handle_event(&key(KeyCode::Char('h')), &mut screen), Some(Action::PrevPage));
        assert_eq!(
            handle_event(&key(KeyCode::Char('i')), &mut screen),
            Some(Action::SelectLanguage(Language::Hindi))
        );
        assert_eq!(
            handle_event(&key(KeyCode::Char('e')), &mut screen),
            Some(Action::SelectLanguage(Language::English))
        );
        assert_eq!(handle_event(&key(KeyCode::Esc), &mut screen), Some(Action::Quit));
        let ctrl_c = CEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(handle_event(&ctrl_c, &mut screen), Some(Action::Quit));
    }

    #[test]
    fn scroll_keys_move_selection_without_action() {
        let mut screen = Screen::default();
        let card = Card {
            post_id: 1,
            title: String::new(),
            excerpt: String::new(),
            image_url: String::new(),
            link: String::new(),
        };
        screen.replace_cards(vec![card.clone(), card]);
        assert_eq!(handle_event(&key(KeyCode::Char('j')), &mut screen), None);
        assert_eq!(screen.selected, 1);
        assert_eq!(handle_event(&key(KeyCode::Up), &mut screen), None);
        assert_eq!(screen.selected, 0);
    }
}
