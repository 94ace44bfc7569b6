//! Translation map and lookup utilities for interface strings.

use std::collections::HashMap;

/// Translation map: dot-notation key -> interface string.
pub type TranslationMap = HashMap<String, String>;

/// What: Look up an interface string with fallback to English.
///
/// Inputs:
/// - `key`: Dot-notation key
/// - `translations`: Map of the active language
/// - `fallback_translations`: English map
///
/// Output:
/// - String from the active map, else from the fallback, else the key itself.
///
/// Details:
/// - Missing keys are logged at debug level so they stay discoverable without flooding logs.
pub fn translate_with_fallback(
    key: &str,
    translations: &TranslationMap,
    fallback_translations: &TranslationMap,
) -> String {
    if let Some(translation) = translations.get(key) {
        return translation.clone();
    }
    if let Some(translation) = fallback_translations.get(key) {
        tracing::debug!(key, "interface string missing in active locale, using English");
        return translation.clone();
    }
    tracing::debug!(key, "missing interface string; returning key as-is");
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_with_fallback() {
        let mut primary = HashMap::new();
        primary.insert("app.busy.loading".to_string(), "लोड".to_string());

        let mut fallback = HashMap::new();
        fallback.insert("app.busy.loading".to_string(), "Loading".to_string());
        fallback.insert("app.cards.title".to_string(), "Posts".to_string());

        assert_eq!(
            translate_with_fallback("app.busy.loading", &primary, &fallback),
            "लोड"
        );
        assert_eq!(
            translate_with_fallback("app.cards.title", &primary, &fallback),
            "Posts"
        );
        assert_eq!(
            translate_with_fallback("app.cards.missing", &primary, &fallback),
            "app.cards.missing"
        );
    }
}
