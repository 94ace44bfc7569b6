//! Reader state: value types, pagination counters, translation cache, and the session.

pub mod pagination;
pub mod session;
pub mod translations;
pub mod types;

pub use pagination::{Pagination, PaginationUi};
pub use session::{DEFAULT_PER_PAGE, FetchTicket, Session, TranslationJob};
pub use translations::TranslationCache;
pub use types::{Card, Language, Post, PostPage, TranslationEntry};
