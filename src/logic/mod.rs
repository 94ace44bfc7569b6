//! Core non-UI logic: card rendering, translation planning, and request flows.

pub mod flow;
pub mod render;
pub mod translate;

pub use flow::{fetch_and_apply, translate_and_apply};
pub use render::{render_cards, strip_html, truncate_excerpt};
pub use translate::{plan_missing, split_translation, store_batch, translate_batch};
