//! Domain model for the emoji dictionary.
//!
//! # Responsibility
//! - Define the record stored in the dictionary list and the form draft used
//!   to create or edit one.
//! - Provide the fixed seed records used when nothing is persisted yet.
//!
//! # Invariants
//! - Every record is identified by a stable `EmojiId`; list position is only
//!   display order.
//! - Records change by whole-value replacement.

pub mod emoji;
pub mod sample;
