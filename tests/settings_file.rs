//! Loading `settings.conf` from disk.

use std::io::Write;

use postdeck::config::{MAX_PER_PAGE, Settings, load_settings};
use postdeck::state::types::Language;

#[test]
/// What: Values in a settings file override defaults; unknown keys are ignored.
fn settings_file_is_loaded() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "# postdeck settings\n\
         endpoint = https://news.example.org/wp-json/wp/v2/posts\n\
         translate-endpoint = https://mt.example.org/get // self-hosted\n\
         per_page = 250\n\
         connect_timeout_secs = 5\n\
         language = hi-IN\n\
         theme = dark"
    )
    .expect("write settings");

    let s = load_settings(Some(file.path()));
    assert_eq!(s.content_endpoint, "https://news.example.org/wp-json/wp/v2/posts");
    assert_eq!(s.translate_endpoint, "https://mt.example.org/get");
    assert_eq!(s.per_page, MAX_PER_PAGE);
    assert_eq!(s.connect_timeout_secs, 5);
    assert_eq!(s.request_timeout_secs, 30);
    assert_eq!(s.default_language, Language::Hindi);
}

#[test]
/// What: A missing file yields defaults.
fn missing_settings_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let s = load_settings(Some(&dir.path().join("settings.conf")));
    assert_eq!(s, Settings::default());
}
