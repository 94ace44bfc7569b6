//! Command-line argument definition and processing.

use clap::Parser;

use crate::config::Settings;
use crate::state::types::Language;

/// postdeck - read WordPress posts in the terminal, in English or Hindi
#[derive(Parser, Debug)]
#[command(name = "postdeck")]
#[command(version)]
#[command(about = "Read WordPress posts in the terminal, in English or Hindi", long_about = None)]
pub struct Args {
    /// WordPress posts endpoint (e.g. https://example.org/wp-json/wp/v2/posts)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Translation endpoint (MyMemory-compatible `get` URL)
    #[arg(long)]
    pub translate_endpoint: Option<String>,

    /// Posts per page (1-100)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub per_page: Option<u32>,

    /// Display language once the first page has loaded (en, hi)
    #[arg(long, value_parser = parse_language)]
    pub lang: Option<Language>,

    /// Print the first page to stdout instead of starting the TUI
    #[arg(long)]
    pub print: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// What: Overlay command-line values on settings loaded from file.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(endpoint) = &self.endpoint {
            settings.content_endpoint.clone_from(endpoint);
        }
        if let Some(endpoint) = &self.translate_endpoint {
            settings.translate_endpoint.clone_from(endpoint);
        }
        if let Some(n) = self.per_page {
            settings.per_page = Settings::clamp_per_page(n);
        }
        if let Some(lang) = self.lang {
            settings.default_language = lang;
        }
    }
}

/// Parse a `--lang` value.
fn parse_language(value: &str) -> Result<Language, String> {
    Language::from_code(value).ok_or_else(|| format!("unsupported language '{value}' (use en or hi)"))
}

/// What: Determine the log level from command line arguments.
///
/// Details:
/// - `--verbose` overrides `--log-level`.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}
