//! postdeck binary entrypoint kept minimal. The runtime lives in `postdeck::app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;
use postdeck::{app, args, config};

/// Log timestamp formatter: local time as `YYYY-MM-DD-T HH:MM:SS`.
struct PostdeckTimer;

impl tracing_subscriber::fmt::time::FormatTime for PostdeckTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialise tracing into `<config_dir>/logs/postdeck.log`, or stderr on failure.
///
/// Details:
/// - `RUST_LOG` takes precedence over `level`.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let log_path = config::logs_dir().join("postdeck.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(PostdeckTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(PostdeckTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(&cli));

    let settings_path = config::resolve_settings_config_path();
    let mut settings = config::load_settings(settings_path.as_deref());
    cli.apply_to(&mut settings);
    tracing::info!(
        endpoint = %settings.content_endpoint,
        per_page = settings.per_page,
        lang = settings.default_language.code(),
        print = cli.print,
        "postdeck starting"
    );

    let result = if cli.print {
        args::run_print(&settings).await
    } else {
        app::run(settings).await
    };
    if let Err(err) = result {
        tracing::error!(error = %err, "application error");
        eprintln!("postdeck: {err}");
        std::process::exit(1);
    }
    tracing::info!("postdeck exited");
}
