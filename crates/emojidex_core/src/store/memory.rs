//! In-memory store holding the encoded document.
//!
//! Keeps exactly what a file store would write, so tests can compare the
//! persisted representation byte for byte. Writes can be made to fail.

use super::codec::{decode_records, encode_records};
use super::{EmojiStore, LoadError, LoadResult, PersistError, PersistResult};
use crate::model::emoji::EmojiRecord;
use std::cell::{Cell, RefCell};
use std::io;

const MEMORY_LOCATION: &str = "memory";

#[derive(Debug, Default)]
pub struct InMemoryStore {
    document: RefCell<Option<String>>,
    fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

impl InMemoryStore {
    /// Creates an empty store (nothing persisted yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose persisted document is `document`, verbatim.
    pub fn with_document(document: impl Into<String>) -> Self {
        let store = Self::new();
        store.document.replace(Some(document.into()));
        store
    }

    /// Returns the persisted document, if any.
    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }

    /// Number of successful saves.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Makes subsequent saves fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl EmojiStore for InMemoryStore {
    fn location(&self) -> String {
        MEMORY_LOCATION.to_string()
    }

    fn try_load(&self) -> LoadResult<Vec<EmojiRecord>> {
        let document = self.document.borrow();
        let Some(text) = document.as_deref() else {
            return Err(LoadError::NotFound {
                location: self.location(),
            });
        };

        decode_records(text).map_err(|source| LoadError::Parse {
            location: self.location(),
            source,
        })
    }

    fn save(&self, records: &[EmojiRecord]) -> PersistResult<()> {
        if self.fail_writes.get() {
            return Err(PersistError::Write {
                location: self.location(),
                source: io::Error::other("writes disabled"),
            });
        }

        let content = encode_records(records)?;
        self.document.replace(Some(content));
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
