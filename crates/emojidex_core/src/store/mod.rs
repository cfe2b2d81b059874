//! Persistence contracts and implementations for the record list.
//!
//! # Responsibility
//! - Define the load/save contract used by the service layer.
//! - Keep encoding and file-system details inside the store boundary.
//!
//! # Invariants
//! - `save` always writes the whole list; there are no partial writes.
//! - A missing or undecodable location is "no data yet" for `load`, never a
//!   panic. `try_load` keeps the reason for callers that want it.

use crate::model::emoji::EmojiRecord;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

pub mod codec;
pub mod file_store;
pub mod memory;

pub type LoadResult<T> = Result<T, LoadError>;
pub type PersistResult<T> = Result<T, PersistError>;

/// Why a persisted list could not be loaded.
#[derive(Debug)]
pub enum LoadError {
    /// Nothing has been persisted at this location yet.
    NotFound { location: String },
    /// The location exists but could not be read.
    Read { location: String, source: io::Error },
    /// The content is not a valid record list.
    Parse {
        location: String,
        source: serde_json::Error,
    },
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { location } => write!(f, "no saved emojis at {location}"),
            Self::Read { location, source } => {
                write!(f, "failed to read emojis from {location}: {source}")
            }
            Self::Parse { location, source } => {
                write!(f, "failed to decode emojis from {location}: {source}")
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound { .. } => None,
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Why the list could not be written.
#[derive(Debug)]
pub enum PersistError {
    Encode(serde_json::Error),
    Write { location: String, source: io::Error },
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "failed to encode emojis: {err}"),
            Self::Write { location, source } => {
                write!(f, "failed to write emojis to {location}: {source}")
            }
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) => Some(err),
            Self::Write { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Storage interface for the ordered record list.
pub trait EmojiStore {
    /// Human-readable location used in errors and logs.
    fn location(&self) -> String;

    /// Reads the persisted list, keeping the failure reason.
    fn try_load(&self) -> LoadResult<Vec<EmojiRecord>>;

    /// Serializes the full list and replaces whatever was persisted.
    fn save(&self, records: &[EmojiRecord]) -> PersistResult<()>;

    /// Reads the persisted list, returning `None` when it is absent or
    /// unreadable. Failures are logged, not returned.
    fn load(&self) -> Option<Vec<EmojiRecord>> {
        match self.try_load() {
            Ok(records) => {
                info!(
                    "event=emoji_load module=store status=ok count={}",
                    records.len()
                );
                Some(records)
            }
            Err(LoadError::NotFound { location }) => {
                info!(
                    "event=emoji_load module=store status=fallback reason=not_found location={}",
                    location
                );
                None
            }
            Err(err) => {
                warn!(
                    "event=emoji_load module=store status=fallback reason=unreadable error={}",
                    err
                );
                None
            }
        }
    }
}

impl<S: EmojiStore + ?Sized> EmojiStore for &S {
    fn location(&self) -> String {
        (**self).location()
    }

    fn try_load(&self) -> LoadResult<Vec<EmojiRecord>> {
        (**self).try_load()
    }

    fn save(&self, records: &[EmojiRecord]) -> PersistResult<()> {
        (**self).save(records)
    }
}
