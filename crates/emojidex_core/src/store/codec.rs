//! JSON encoding of the record list.
//!
//! # Invariants
//! - The document is a JSON array; array order is list order.
//! - `decode_records(encode_records(list)) == list` for every list.
//! - Decoded lists never contain two records with the same id.

use crate::model::emoji::EmojiRecord;
use log::warn;
use std::collections::HashSet;

/// Encodes the full list as pretty-printed JSON with a trailing newline.
pub fn encode_records(records: &[EmojiRecord]) -> Result<String, serde_json::Error> {
    let mut text = serde_json::to_string_pretty(records)?;
    text.push('\n');
    Ok(text)
}

/// Decodes a list written by [`encode_records`].
///
/// Records missing an id (hand-written files) get a fresh one. A repeated id
/// is replaced on the later record so every id stays resolvable.
pub fn decode_records(text: &str) -> Result<Vec<EmojiRecord>, serde_json::Error> {
    let mut records: Vec<EmojiRecord> = serde_json::from_str(text)?;

    let mut seen = HashSet::with_capacity(records.len());
    for (position, record) in records.iter_mut().enumerate() {
        if !seen.insert(record.id()) {
            warn!(
                "event=emoji_decode module=store status=repaired reason=duplicate_id position={}",
                position
            );
            record.reassign_id();
            seen.insert(record.id());
        }
    }

    Ok(records)
}
