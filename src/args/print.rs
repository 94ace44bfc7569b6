//! `--print`: fetch one page and write it to stdout as plain text.

use std::io::Write;

use crate::config::Settings;
use crate::i18n;
use crate::logic::flow::{fetch_and_apply, translate_and_apply};
use crate::sources::{ContentApi, MyMemoryClient, Result, TranslateApi, WpClient, build_http_client};
use crate::state::session::Session;
use crate::ui::screen::Screen;

/// What: Print page 1 using the configured endpoints.
///
/// # Errors
/// - HTTP client setup failures, a failed page fetch, or stdout write errors.
pub async fn run_print(settings: &Settings) -> Result<()> {
    let http = build_http_client(settings)?;
    let content = WpClient::new(http.clone(), settings.content_endpoint.clone());
    let translator = MyMemoryClient::new(http, settings.translate_endpoint.clone());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    print_page(&content, &translator, settings, &mut out).await
}

/// What: Fetch page 1, translate it when a secondary language is configured, and write it.
///
/// Output:
/// - One block per card (title, excerpt, image, link), followed by the page info line
///   when the listing has more than one page.
///
/// # Errors
/// - Returns the localized load error when the page cannot be fetched.
/// - A failed translation batch is not an error; untranslated cards print in English.
pub async fn print_page<C: ContentApi, T: TranslateApi, W: Write>(
    content: &C,
    translator: &T,
    settings: &Settings,
    out: &mut W,
) -> Result<()> {
    let mut session = Session::new(settings.per_page);
    let mut screen = Screen::default();

    let ticket = session.begin_fetch(&mut screen);
    fetch_and_apply(&mut session, content, ticket, &mut screen).await;
    if let Some(message) = screen.error() {
        return Err(message.to_string().into());
    }
    if let Some(job) = session.select_language(settings.default_language, &mut screen) {
        translate_and_apply(&mut session, translator, &job, &mut screen).await;
    }

    let lang = session.language();
    if screen.cards().is_empty() {
        writeln!(out, "{}", i18n::t(lang, "app.cards.empty"))?;
    }
    for card in screen.cards() {
        writeln!(out, "{}", card.title)?;
        if !card.excerpt.is_empty() {
            writeln!(out, "{}", card.excerpt)?;
        }
        writeln!(out, "{}: {}", i18n::t(lang, "app.cards.image"), card.image_url)?;
        writeln!(out, "{}: {}", i18n::t(lang, "app.cards.read_more"), card.link)?;
        writeln!(out)?;
    }
    let controls = session.pagination().affordances();
    if controls.visible {
        writeln!(out, "{}", i18n::t_fmt1(lang, "app.print.page_info", controls.info))?;
    }
    out.flush()?;
    Ok(())
}
