use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;
use tokio::time::Duration;

use crate::logic::translate::translate_batch;
use crate::sources::{ContentApi, Result, TranslateApi};
use crate::state::session::{FetchTicket, TranslationJob};
use crate::state::types::PostPage;

/// Spinner refresh interval.
const TICK_INTERVAL: Duration = Duration::from_millis(120);

/// Outcome of one page fetch, tagged with its ticket.
pub type FetchResult = (FetchTicket, Result<PostPage>);
/// Outcome of one translation batch, tagged with its job.
pub type TranslationResult = (TranslationJob, Result<Vec<String>>);

/// What: Channel ends held by the event loop.
///
/// Details:
/// - Request receivers are moved into the workers spawned by [`Channels::new`].
pub struct Channels {
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    pub event_thread_cancelled: Arc<AtomicBool>,
    pub tick_tx: mpsc::UnboundedSender<()>,
    pub tick_rx: mpsc::UnboundedReceiver<()>,
    pub fetch_req_tx: mpsc::UnboundedSender<FetchTicket>,
    pub fetch_res_rx: mpsc::UnboundedReceiver<FetchResult>,
    pub translate_req_tx: mpsc::UnboundedSender<TranslationJob>,
    pub translate_res_rx: mpsc::UnboundedReceiver<TranslationResult>,
}

impl Channels {
    /// What: Create the channels and spawn the content and translation workers.
    pub fn new<C: ContentApi, T: TranslateApi>(content: C, translator: T) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();
        let (fetch_req_tx, fetch_req_rx) = mpsc::unbounded_channel::<FetchTicket>();
        let (fetch_res_tx, fetch_res_rx) = mpsc::unbounded_channel::<FetchResult>();
        let (translate_req_tx, translate_req_rx) = mpsc::unbounded_channel::<TranslationJob>();
        let (translate_res_tx, translate_res_rx) = mpsc::unbounded_channel::<TranslationResult>();

        spawn_content_worker(Arc::new(content), fetch_req_rx, fetch_res_tx);
        spawn_translation_worker(Arc::new(translator), translate_req_rx, translate_res_tx);

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled,
            tick_tx,
            tick_rx,
            fetch_req_tx,
            fetch_res_rx,
            translate_req_tx,
            translate_res_rx,
        }
    }
}

/// What: Serve page fetch tickets.
///
/// Details:
/// - Each ticket runs in its own task, so fetches overlap; the session sorts out
///   which response is current.
fn spawn_content_worker<C: ContentApi>(
    api: Arc<C>,
    mut req_rx: mpsc::UnboundedReceiver<FetchTicket>,
    res_tx: mpsc::UnboundedSender<FetchResult>,
) {
    tokio::spawn(async move {
        while let Some(ticket) = req_rx.recv().await {
            let api = Arc::clone(&api);
            let res_tx = res_tx.clone();
            tokio::spawn(async move {
                let outcome = api.fetch_page(ticket.page, ticket.per_page).await;
                let _ = res_tx.send((ticket, outcome));
            });
        }
        tracing::debug!("content worker stopped");
    });
}

/// What: Serve translation jobs; each job is one concurrent batch.
fn spawn_translation_worker<T: TranslateApi>(
    api: Arc<T>,
    mut req_rx: mpsc::UnboundedReceiver<TranslationJob>,
    res_tx: mpsc::UnboundedSender<TranslationResult>,
) {
    tokio::spawn(async move {
        while let Some(job) = req_rx.recv().await {
            let api = Arc::clone(&api);
            let res_tx = res_tx.clone();
            tokio::spawn(async move {
                let outcome = translate_batch(api.as_ref(), &job.requests, job.target).await;
                let _ = res_tx.send((job, outcome));
            });
        }
        tracing::debug!("translation worker stopped");
    });
}

/// What: Send a tick every [`TICK_INTERVAL`] to animate the busy spinner.
pub fn spawn_tick_worker(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Read terminal events on a dedicated thread.
///
/// Details:
/// - Polls with a short timeout so the cancellation flag is honoured promptly.
/// - Does nothing in headless mode.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => tracing::debug!(error = %e, "terminal read failed"),
                },
                Ok(false) => {}
                Err(e) => tracing::debug!(error = %e, "terminal poll failed"),
            }
        }
    });
}
