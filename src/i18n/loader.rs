//! Locale YAML parsing.

use std::collections::HashMap;

use crate::i18n::translations::TranslationMap;

/// What: Parse locale YAML content into a `TranslationMap`.
///
/// Inputs:
/// - `yaml_content`: YAML document whose single top-level key is the locale code
///
/// Output:
/// - `Result<TranslationMap, String>` with dot-notation keys
///
/// # Errors
/// - Returns `Err` when the YAML cannot be parsed
///
/// Details:
/// - The top-level locale key (e.g. `hi-IN:`) is skipped; nested maps are flattened.
pub fn parse_locale_yaml(yaml_content: &str) -> Result<TranslationMap, String> {
    let doc: serde_norway::Value =
        serde_norway::from_str(yaml_content).map_err(|e| format!("Failed to parse YAML: {e}"))?;

    let mut translations = HashMap::new();
    if let Some(locale_obj) = doc.as_mapping() {
        for (_locale_key, locale_value) in locale_obj {
            flatten_yaml_value(locale_value, "", &mut translations);
        }
    }
    Ok(translations)
}

/// What: Recursively flatten a YAML value into dot-notation keys.
///
/// Details:
/// - Strings are stored as-is; numbers and booleans are stringified; sequences and nulls are skipped.
fn flatten_yaml_value(
    value: &serde_norway::Value,
    prefix: &str,
    translations: &mut TranslationMap,
) {
    match value {
        serde_norway::Value::Mapping(map) => {
            for (key, val) in map {
                if let Some(key_str) = key.as_str() {
                    let new_prefix = if prefix.is_empty() {
                        key_str.to_string()
                    } else {
                        format!("{prefix}.{key_str}")
                    };
                    flatten_yaml_value(val, &new_prefix, translations);
                }
            }
        }
        serde_norway::Value::String(s) => {
            translations.insert(prefix.to_string(), s.clone());
        }
        serde_norway::Value::Number(n) => {
            translations.insert(prefix.to_string(), n.to_string());
        }
        serde_norway::Value::Bool(b) => {
            translations.insert(prefix.to_string(), b.to_string());
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_keys_are_flattened_below_locale_root() {
        let yaml = "hi-IN:\n  app:\n    busy:\n      loading: \"लोड\"\n    per_page: 6\n";
        let map = parse_locale_yaml(yaml).expect("valid yaml");
        assert_eq!(map.get("app.busy.loading").map(String::as_str), Some("लोड"));
        assert_eq!(map.get("app.per_page").map(String::as_str), Some("6"));
        assert!(!map.contains_key("hi-IN"));
    }

    #[test]
    fn invalid_yaml_is_reported() {
        assert!(parse_locale_yaml("app: [unclosed").is_err());
    }
}
