//! Core domain logic for emojidex, a personal emoji dictionary.
//! This crate owns the record model, the single-emoji check and persistence.

pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod symbol;

pub use config::{AppConfig, ConfigOverrides};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::emoji::{DraftError, EmojiDraft, EmojiId, EmojiRecord};
pub use model::sample::{sample_records, SAMPLE_COUNT};
pub use service::emoji_book::{BookError, BookResult, BookSource, EmojiBook, MutationOutcome};
pub use store::codec::{decode_records, encode_records};
pub use store::file_store::JsonFileStore;
pub use store::memory::InMemoryStore;
pub use store::{EmojiStore, LoadError, LoadResult, PersistError, PersistResult};
pub use symbol::{classify_symbol, is_single_emoji, SymbolVerdict};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
