use std::env;
use std::path::{Path, PathBuf};

/// Application directory name under the config base.
const APP_DIR: &str = "postdeck";

/// Resolve the config base from `XDG_CONFIG_HOME`, else `$HOME/.config`, else `.`.
fn config_base(xdg: Option<&str>, home: Option<&str>) -> PathBuf {
    if let Some(x) = xdg.filter(|x| !x.trim().is_empty()) {
        return PathBuf::from(x);
    }
    home.filter(|h| !h.trim().is_empty()).map_or_else(
        || PathBuf::from("."),
        |h| Path::new(h).join(".config"),
    )
}

/// Settings file candidates in lookup order.
fn settings_candidates(xdg: Option<&str>, home: Option<&str>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(x) = xdg.filter(|x| !x.trim().is_empty()) {
        candidates.push(Path::new(x).join(APP_DIR).join("settings.conf"));
    }
    if let Some(h) = home.filter(|h| !h.trim().is_empty()) {
        candidates.push(Path::new(h).join(".config").join(APP_DIR).join("settings.conf"));
    }
    candidates
}

/// Locate `settings.conf`: `$XDG_CONFIG_HOME/postdeck` first, then `$HOME/.config/postdeck`.
#[must_use]
pub fn resolve_settings_config_path() -> Option<PathBuf> {
    let xdg = env::var("XDG_CONFIG_HOME").ok();
    let home = env::var("HOME").ok();
    settings_candidates(xdg.as_deref(), home.as_deref())
        .into_iter()
        .find(|p| p.is_file())
}

/// Config directory for postdeck (ensured to exist).
#[must_use]
pub fn config_dir() -> PathBuf {
    let xdg = env::var("XDG_CONFIG_HOME").ok();
    let home = env::var("HOME").ok();
    let dir = config_base(xdg.as_deref(), home.as_deref()).join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `<config_dir>/logs` (ensured to exist).
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}
