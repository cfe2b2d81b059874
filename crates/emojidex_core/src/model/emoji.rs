//! Emoji record domain model.
//!
//! # Responsibility
//! - Define the canonical dictionary entry (`EmojiRecord`).
//! - Define the add/edit form input (`EmojiDraft`) and the rules that gate
//!   saving it.
//!
//! # Invariants
//! - `id` is assigned once at creation and survives edits and reorders.
//! - Edits produce a new record value through `EmojiRecord::revised`.
//! - A draft is savable only when `symbol` is a single emoji and `name`,
//!   `description` and `usage` are all non-empty.

use crate::symbol::is_single_emoji;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one dictionary entry.
///
/// Serialized as a plain UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmojiId(Uuid);

impl EmojiId {
    /// Creates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for EmojiId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for EmojiId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the emoji dictionary.
///
/// Files written without an `id` field get a fresh id on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiRecord {
    #[serde(default)]
    id: EmojiId,
    /// Intended to hold exactly one emoji character.
    pub symbol: String,
    /// Display label.
    pub name: String,
    pub description: String,
    pub usage: String,
}

impl EmojiRecord {
    /// Creates a record with a generated stable ID.
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        usage: impl Into<String>,
    ) -> Self {
        Self::with_id(EmojiId::new(), symbol, name, description, usage)
    }

    /// Creates a record with a caller-provided ID.
    ///
    /// Used for the seed set, whose ids are fixed so that the fallback list
    /// is identical on every run.
    pub fn with_id(
        id: EmojiId,
        symbol: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        usage: impl Into<String>,
    ) -> Self {
        Self {
            id,
            symbol: symbol.into(),
            name: name.into(),
            description: description.into(),
            usage: usage.into(),
        }
    }

    pub fn id(&self) -> EmojiId {
        self.id
    }

    /// Returns the replacement value for an edit: draft content, same id.
    pub fn revised(&self, draft: EmojiDraft) -> Self {
        Self {
            id: self.id,
            symbol: draft.symbol,
            name: draft.name,
            description: draft.description,
            usage: draft.usage,
        }
    }

    /// Gives this record a new identity. Only used to repair duplicate ids
    /// found in a decoded file.
    pub(crate) fn reassign_id(&mut self) {
        self.id = EmojiId::new();
    }
}

/// Text currently entered in the add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmojiDraft {
    pub symbol: String,
    pub name: String,
    pub description: String,
    pub usage: String,
}

impl EmojiDraft {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        usage: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            description: description.into(),
            usage: usage.into(),
        }
    }

    /// Checks the save gate and reports the first field that blocks it.
    ///
    /// Fields are checked in form order: symbol, name, description, usage.
    /// Whitespace counts as content.
    pub fn validate(&self) -> Result<(), DraftError> {
        if !is_single_emoji(&self.symbol) {
            return Err(DraftError::NotSingleEmoji);
        }
        if self.name.is_empty() {
            return Err(DraftError::EmptyName);
        }
        if self.description.is_empty() {
            return Err(DraftError::EmptyDescription);
        }
        if self.usage.is_empty() {
            return Err(DraftError::EmptyUsage);
        }
        Ok(())
    }

    /// Whether the save action should be enabled for this input.
    pub fn is_savable(&self) -> bool {
        self.validate().is_ok()
    }

    /// Validates the draft and turns it into a new record with a fresh id.
    pub fn into_record(self) -> Result<EmojiRecord, DraftError> {
        self.validate()?;
        Ok(EmojiRecord::new(
            self.symbol,
            self.name,
            self.description,
            self.usage,
        ))
    }
}

impl From<&EmojiRecord> for EmojiDraft {
    fn from(record: &EmojiRecord) -> Self {
        Self {
            symbol: record.symbol.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            usage: record.usage.clone(),
        }
    }
}

/// Reason a draft cannot be saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    NotSingleEmoji,
    EmptyName,
    EmptyDescription,
    EmptyUsage,
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotSingleEmoji => write!(f, "symbol must be exactly one emoji"),
            Self::EmptyName => write!(f, "name cannot be empty"),
            Self::EmptyDescription => write!(f, "description cannot be empty"),
            Self::EmptyUsage => write!(f, "usage cannot be empty"),
        }
    }
}

impl Error for DraftError {}

#[cfg(test)]
mod tests {
    use super::{EmojiId, EmojiRecord};

    #[test]
    fn reassign_id_changes_identity_only() {
        let mut record = EmojiRecord::new("🐢", "Turtle", "A cute turtle.", "something slow");
        let before = record.clone();

        record.reassign_id();

        assert_ne!(record.id(), before.id());
        assert_eq!(record.symbol, before.symbol);
        assert_eq!(record.usage, before.usage);
    }

    #[test]
    fn emoji_id_displays_as_hyphenated_uuid() {
        let id = EmojiId::new();
        assert_eq!(id.to_string(), id.as_uuid().hyphenated().to_string());
    }
}
