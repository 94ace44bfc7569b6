//! Interface strings for postdeck.
//!
//! Post content is machine translated on demand (see `logic::translate`); this
//! module only covers the surrounding chrome: titles, busy texts, the error
//! message, key hints.
//!
//! # Locale Files
//!
//! One YAML file per display language lives in `locales/` and is embedded at
//! compile time (`locales/en-US.yml`, `locales/hi-IN.yml`). Nested keys are
//! flattened into dot notation:
//!
//! ```yaml
//! hi-IN:
//!   app:
//!     busy:
//!       translating: "कृपया प्रतीक्षा करें..."
//! ```
//!
//! becomes `app.busy.translating`.
//!
//! # Error Handling
//!
//! - A locale file that fails to parse is logged and treated as empty
//! - Missing keys fall back to English, then to the key itself

mod loader;
pub mod translations;

pub use loader::parse_locale_yaml;
pub use translations::{TranslationMap, translate_with_fallback};

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::state::types::Language;

/// Embedded English interface strings.
const EN_US_YML: &str = include_str!("../../locales/en-US.yml");
/// Embedded Hindi interface strings.
const HI_IN_YML: &str = include_str!("../../locales/hi-IN.yml");

/// Parsed string tables, one per display language.
static CATALOG: LazyLock<HashMap<Language, TranslationMap>> = LazyLock::new(|| {
    let mut catalog = HashMap::new();
    for (lang, yaml) in [(Language::English, EN_US_YML), (Language::Hindi, HI_IN_YML)] {
        let map = parse_locale_yaml(yaml).unwrap_or_else(|e| {
            tracing::error!(locale = lang.locale(), error = %e, "embedded locale failed to parse");
            TranslationMap::new()
        });
        tracing::debug!(locale = lang.locale(), keys = map.len(), "loaded interface strings");
        catalog.insert(lang, map);
    }
    catalog
});

/// Empty map used when a language has no table.
static EMPTY: LazyLock<TranslationMap> = LazyLock::new(TranslationMap::new);

/// What: Get the interface string for `key` in `lang`.
///
/// Output:
/// - Localized string, English fallback, or the key itself.
#[must_use]
pub fn t(lang: Language, key: &str) -> String {
    let active = CATALOG.get(&lang).unwrap_or(&*EMPTY);
    let fallback = CATALOG.get(&Language::English).unwrap_or(&*EMPTY);
    translate_with_fallback(key, active, fallback)
}

/// What: Get an interface string with format arguments.
///
/// Details:
/// - Replaces `{}` placeholders in order: first `{}` gets the first argument, etc.
#[must_use]
pub fn t_fmt(lang: Language, key: &str, args: &[&dyn std::fmt::Display]) -> String {
    let mut result = t(lang, key);
    for arg in args {
        result = result.replacen("{}", &arg.to_string(), 1);
    }
    result
}

/// What: Get an interface string with a single format argument.
#[must_use]
pub fn t_fmt1<T: std::fmt::Display>(lang: Language, key: &str, arg: T) -> String {
    t_fmt(lang, key, &[&arg])
}
