//! Sequential request flows that run a session step to completion.
//!
//! The interactive runtime dispatches tickets to background workers instead;
//! these helpers serve print mode and tests.

use crate::logic::translate::translate_batch;
use crate::sources::{ContentApi, TranslateApi};
use crate::state::session::{FetchTicket, Session, TranslationJob};
use crate::ui::view::View;

/// What: Fetch the page described by `ticket` and apply the result.
///
/// Output:
/// - `true` when the session accepted the result.
pub async fn fetch_and_apply<C: ContentApi, V: View>(
    session: &mut Session,
    api: &C,
    ticket: FetchTicket,
    view: &mut V,
) -> bool {
    let outcome = api.fetch_page(ticket.page, ticket.per_page).await;
    session.apply_fetch(ticket, outcome, view)
}

/// What: Run a translation job and apply the result.
pub async fn translate_and_apply<T: TranslateApi, V: View>(
    session: &mut Session,
    api: &T,
    job: &TranslationJob,
    view: &mut V,
) {
    let outcome = translate_batch(api, &job.requests, job.target).await;
    session.apply_translations(job, outcome, view);
}
