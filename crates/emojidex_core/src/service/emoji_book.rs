//! Emoji dictionary service.
//!
//! # Responsibility
//! - Apply the startup policy: persisted list if loadable, seed set otherwise.
//! - Provide insert/update/delete/reorder entry points for front ends.
//! - Save the whole list after every successful mutation.
//!
//! # Invariants
//! - The book is the only owner of the record list; callers get slices.
//! - A mutation that fails its precondition leaves both the list and the
//!   persisted copy untouched.
//! - A failed save never rolls back the in-memory change; it is reported in
//!   the `MutationOutcome` and logged.

use crate::model::emoji::{EmojiDraft, EmojiId, EmojiRecord};
use crate::model::sample::sample_records;
use crate::store::{EmojiStore, PersistError, PersistResult};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BookResult<T> = Result<T, BookError>;

/// Where the list came from when the book was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookSource {
    /// Loaded from the store.
    Persisted,
    /// Store was empty or unreadable; seeded with the sample set.
    Samples,
}

impl BookSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Persisted => "persisted",
            Self::Samples => "samples",
        }
    }
}

/// Precondition failure for a book mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    NotFound(EmojiId),
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for BookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "emoji not found: {id}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "position {index} is out of range for {len} emojis")
            }
        }
    }
}

impl Error for BookError {}

/// Result of an applied mutation.
///
/// `value` is always valid because the change was applied in memory;
/// `saved` tells whether the persisted copy caught up.
#[derive(Debug)]
#[must_use]
pub struct MutationOutcome<T> {
    pub value: T,
    pub saved: PersistResult<()>,
}

impl<T> MutationOutcome<T> {
    pub fn is_saved(&self) -> bool {
        self.saved.is_ok()
    }

    pub fn save_error(&self) -> Option<&PersistError> {
        self.saved.as_ref().err()
    }

    pub fn into_parts(self) -> (T, PersistResult<()>) {
        (self.value, self.saved)
    }
}

/// Ordered emoji dictionary bound to a store.
pub struct EmojiBook<S: EmojiStore> {
    store: S,
    records: Vec<EmojiRecord>,
    source: BookSource,
}

impl<S: EmojiStore> EmojiBook<S> {
    /// Opens the dictionary using `load() ?? sample_records()`.
    ///
    /// Opening never writes; the seed set is persisted by the first mutation.
    pub fn open(store: S) -> Self {
        let (records, source) = match store.load() {
            Some(records) => (records, BookSource::Persisted),
            None => (sample_records(), BookSource::Samples),
        };

        info!(
            "event=book_open module=service status=ok source={} count={} location={}",
            source.as_str(),
            records.len(),
            store.location()
        );

        Self {
            store,
            records,
            source,
        }
    }

    /// Records in display order.
    pub fn records(&self) -> &[EmojiRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source(&self) -> BookSource {
        self.source
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn get(&self, id: EmojiId) -> Option<&EmojiRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Current display position of `id`.
    pub fn position(&self, id: EmojiId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    /// Resolves a display position to a stable id.
    pub fn id_at(&self, index: usize) -> BookResult<EmojiId> {
        self.records
            .get(index)
            .map(EmojiRecord::id)
            .ok_or(BookError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
    }

    /// Appends `record` at the end of the list.
    pub fn append(&mut self, record: EmojiRecord) -> MutationOutcome<EmojiId> {
        let id = record.id();
        self.records.push(record);
        self.commit("append", id)
    }

    /// Replaces the content of `id` with `draft`, keeping its id and
    /// position. Returns the previous value.
    pub fn replace(
        &mut self,
        id: EmojiId,
        draft: EmojiDraft,
    ) -> BookResult<MutationOutcome<EmojiRecord>> {
        let index = self.require_position(id)?;
        let revised = self.records[index].revised(draft);
        let previous = std::mem::replace(&mut self.records[index], revised);
        Ok(self.commit("replace", previous))
    }

    /// Deletes `id` and returns the removed record.
    pub fn remove(&mut self, id: EmojiId) -> BookResult<MutationOutcome<EmojiRecord>> {
        let index = self.require_position(id)?;
        let removed = self.records.remove(index);
        Ok(self.commit("remove", removed))
    }

    /// Moves the record at `from` so that it ends up at `to`.
    ///
    /// Both positions refer to the current list; this matches dragging a row
    /// in a list view (remove at `from`, insert at `to`).
    pub fn move_record(&mut self, from: usize, to: usize) -> BookResult<MutationOutcome<EmojiId>> {
        let len = self.records.len();
        for index in [from, to] {
            if index >= len {
                return Err(BookError::IndexOutOfRange { index, len });
            }
        }

        let moved = self.records.remove(from);
        let id = moved.id();
        self.records.insert(to, moved);
        Ok(self.commit("move", id))
    }

    /// Saves the current list again, e.g. after an earlier save failed.
    pub fn persist(&self) -> PersistResult<()> {
        self.store.save(&self.records)
    }

    fn require_position(&self, id: EmojiId) -> BookResult<usize> {
        self.position(id).ok_or(BookError::NotFound(id))
    }

    fn commit<T>(&self, operation: &str, value: T) -> MutationOutcome<T> {
        let saved = self.persist();
        match &saved {
            Ok(()) => info!(
                "event=book_mutation module=service status=ok op={} count={}",
                operation,
                self.records.len()
            ),
            Err(err) => warn!(
                "event=book_mutation module=service status=unsaved op={} count={} error={}",
                operation,
                self.records.len(),
                err
            ),
        }
        MutationOutcome { value, saved }
    }
}
