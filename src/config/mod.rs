//! Runtime configuration: directories and the `settings.conf` file.

mod paths;
mod settings;

pub use paths::{config_dir, logs_dir, resolve_settings_config_path};
pub use settings::{
    DEFAULT_CONTENT_ENDPOINT, DEFAULT_TRANSLATE_ENDPOINT, MAX_PER_PAGE, Settings, load_settings,
    parse_settings,
};
