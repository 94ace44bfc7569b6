use tokio::sync::mpsc;

use crate::events::Action;
use crate::sources::Result;
use crate::state::session::{FetchTicket, Session, TranslationJob};
use crate::state::types::{Language, PostPage};
use crate::ui::screen::Screen;

/// Forward a fetch ticket to the content worker.
fn dispatch_fetch(ticket: FetchTicket, fetch_req_tx: &mpsc::UnboundedSender<FetchTicket>) {
    if fetch_req_tx.send(ticket).is_err() {
        tracing::warn!(seq = ticket.seq, "content worker gone; fetch dropped");
    }
}

/// Forward a translation job to the translation worker.
fn dispatch_translation(
    job: TranslationJob,
    translate_req_tx: &mpsc::UnboundedSender<TranslationJob>,
) {
    let seq = job.seq;
    if translate_req_tx.send(job).is_err() {
        tracing::warn!(seq, "translation worker gone; batch dropped");
    }
}

/// What: Apply a key-derived action to the session.
///
/// Output:
/// - `true` when the application should exit.
pub fn handle_action(
    action: Action,
    session: &mut Session,
    screen: &mut Screen,
    fetch_req_tx: &mpsc::UnboundedSender<FetchTicket>,
    translate_req_tx: &mpsc::UnboundedSender<TranslationJob>,
) -> bool {
    match action {
        Action::Quit => return true,
        Action::NextPage => {
            if let Some(ticket) = session.next_page(screen) {
                dispatch_fetch(ticket, fetch_req_tx);
            }
        }
        Action::PrevPage => {
            if let Some(ticket) = session.prev_page(screen) {
                dispatch_fetch(ticket, fetch_req_tx);
            }
        }
        Action::SelectLanguage(lang) => {
            if let Some(job) = session.select_language(lang, screen) {
                dispatch_translation(job, translate_req_tx);
            }
        }
    }
    false
}

/// What: Apply a fetch result, then switch to the start language once.
///
/// Inputs:
/// - `start_language`: Taken on the first successful, current fetch.
pub fn handle_fetch_result(
    session: &mut Session,
    screen: &mut Screen,
    ticket: FetchTicket,
    outcome: Result<PostPage>,
    start_language: &mut Option<Language>,
    translate_req_tx: &mpsc::UnboundedSender<TranslationJob>,
) {
    let ok = outcome.is_ok();
    if session.apply_fetch(ticket, outcome, screen)
        && ok
        && let Some(lang) = start_language.take()
        && let Some(job) = session.select_language(lang, screen)
    {
        dispatch_translation(job, translate_req_tx);
    }
}

/// Apply a translation batch result.
pub fn handle_translation_result(
    session: &mut Session,
    screen: &mut Screen,
    job: &TranslationJob,
    outcome: Result<Vec<String>>,
) {
    session.apply_translations(job, outcome, screen);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::{Post, Rendered};

    fn one_post_page() -> PostPage {
        PostPage {
            posts: vec![Post {
                id: 7,
                title: Rendered {
                    rendered: "Seven".into(),
                },
                excerpt: Rendered::default(),
                link: String::new(),
                embedded: None,
            }],
            total_pages: 2,
        }
    }

    #[test]
    fn navigation_dispatches_tickets() {
        let (fetch_tx, mut fetch_rx) = mpsc::unbounded_channel();
        let (tr_tx, _tr_rx) = mpsc::unbounded_channel();
        let mut session = Session::default();
        let mut screen = Screen::default();
        let first = session.begin_fetch(&mut screen);
        let mut start = None;
        handle_fetch_result(&mut session, &mut screen, first, Ok(one_post_page()), &mut start, &tr_tx);

        assert!(!handle_action(Action::NextPage, &mut session, &mut screen, &fetch_tx, &tr_tx));
        let ticket = fetch_rx.try_recv().expect("ticket for page 2");
        assert_eq!(ticket.page, 2);
        assert!(handle_action(Action::Quit, &mut session, &mut screen, &fetch_tx, &tr_tx));
    }

    #[test]
    fn start_language_applies_after_first_successful_fetch() {
        let (tr_tx, mut tr_rx) = mpsc::unbounded_channel();
        let mut session = Session::default();
        let mut screen = Screen::default();
        let mut start = Some(Language::Hindi);

        let failed = session.begin_fetch(&mut screen);
        handle_fetch_result(&mut session, &mut screen, failed, Err("down".into()), &mut start, &tr_tx);
        assert_eq!(start, Some(Language::Hindi));

        let retry = session.begin_fetch(&mut screen);
        handle_fetch_result(&mut session, &mut screen, retry, Ok(one_post_page()), &mut start, &tr_tx);
        assert!(start.is_none());
        let job = tr_rx.try_recv().expect("translation job");
        assert_eq!(job.requests.len(), 1);
        assert_eq!(screen.active_language, Language::Hindi);
    }
}
