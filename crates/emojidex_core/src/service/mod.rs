//! Core use-case services.
//!
//! # Responsibility
//! - Own the in-memory record list and apply user mutations to it.
//! - Keep the persisted copy in sync by saving explicitly after each change.

pub mod emoji_book;
