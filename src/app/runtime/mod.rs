use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::config::Settings;
use crate::events::handle_event;
use crate::sources::{ContentApi, MyMemoryClient, Result, TranslateApi, WpClient, build_http_client};
use crate::state::session::Session;
use crate::state::types::Language;
use crate::ui::screen::Screen;
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod handlers;

use background::{Channels, spawn_event_thread, spawn_tick_worker};
use handlers::{handle_action, handle_fetch_result, handle_translation_result};

/// What: Run the reader against the configured WordPress and translation endpoints.
///
/// Output:
/// - `Ok(())` when the user quits; `Err` when the HTTP client or terminal cannot be set up.
pub async fn run(settings: Settings) -> Result<()> {
    let http = build_http_client(&settings)?;
    let content = WpClient::new(http.clone(), settings.content_endpoint.clone());
    let translator = MyMemoryClient::new(http, settings.translate_endpoint.clone());
    run_with(content, translator, &settings).await
}

/// What: Run the reader with explicit content and translation backends.
///
/// Details:
/// - `POSTDECK_TEST_HEADLESS=1` skips terminal setup, drawing, and key input.
/// - Page 1 is requested immediately; `settings.default_language` is applied once
///   that first page has loaded.
pub async fn run_with<C: ContentApi, T: TranslateApi>(
    content: C,
    translator: T,
    settings: &Settings,
) -> Result<()> {
    let headless = std::env::var("POSTDECK_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let terminal = if headless {
        None
    } else {
        match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
            Ok(t) => Some(t),
            Err(e) => {
                let _ = restore_terminal();
                return Err(e.into());
            }
        }
    };

    let mut channels = Channels::new(content, translator);
    spawn_tick_worker(channels.tick_tx.clone());
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    let start_language =
        (settings.default_language != Language::English).then_some(settings.default_language);
    event_loop(terminal, &mut channels, settings.per_page, start_language).await;

    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);
    if !headless {
        restore_terminal()?;
    }
    Ok(())
}

/// Drive drawing, input, and worker results until the user quits.
async fn event_loop(
    mut terminal: Option<Terminal<CrosstermBackend<std::io::Stdout>>>,
    channels: &mut Channels,
    per_page: u32,
    mut start_language: Option<Language>,
) {
    let mut session = Session::new(per_page);
    let mut screen = Screen::default();

    let first = session.begin_fetch(&mut screen);
    let _ = channels.fetch_req_tx.send(first);

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &screen));
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if let Some(action) = handle_event(&ev, &mut screen)
                    && handle_action(
                        action,
                        &mut session,
                        &mut screen,
                        &channels.fetch_req_tx,
                        &channels.translate_req_tx,
                    )
                {
                    break;
                }
            }
            Some((ticket, outcome)) = channels.fetch_res_rx.recv() => {
                handle_fetch_result(
                    &mut session,
                    &mut screen,
                    ticket,
                    outcome,
                    &mut start_language,
                    &channels.translate_req_tx,
                );
            }
            Some((job, outcome)) = channels.translate_res_rx.recv() => {
                handle_translation_result(&mut session, &mut screen, &job, outcome);
            }
            Some(()) = channels.tick_rx.recv() => {
                screen.tick();
            }
            else => break,
        }
    }
    tracing::debug!("event loop exited");
}
