//! Single-emoji input check used to gate saving a record.
//!
//! # Responsibility
//! - Decide whether a short text input is exactly one emoji character.
//!
//! # Invariants
//! - Characters are counted as extended grapheme clusters, so flag,
//!   skin-tone and ZWJ sequences count as one character.
//! - Only the first code point of the cluster is inspected for emoji
//!   properties.
//! - Pure: no side effects, no dependency on stored records.

use unicode_properties::{EmojiStatus, UnicodeEmoji};
use unicode_segmentation::UnicodeSegmentation;

/// Classification of a symbol input, in the order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolVerdict {
    /// No characters at all.
    Empty,
    /// More than one user-perceived character; carries the count.
    MultipleCharacters(usize),
    /// One character that does not qualify as an emoji.
    NotEmoji,
    /// Exactly one emoji character.
    SingleEmoji,
}

impl SymbolVerdict {
    pub fn is_single_emoji(self) -> bool {
        matches!(self, Self::SingleEmoji)
    }
}

/// Returns whether `text` is exactly one emoji character.
///
/// A lone cluster qualifies when it is composed of several code points and
/// starts with an `Emoji` code point (flags, keycaps, skin-tone and ZWJ
/// sequences, `U+FE0F` variants), or when its first code point has default
/// emoji presentation.
pub fn is_single_emoji(text: &str) -> bool {
    classify_symbol(text).is_single_emoji()
}

/// Classifies `text` with the same rules as [`is_single_emoji`], keeping the
/// reason for rejection.
pub fn classify_symbol(text: &str) -> SymbolVerdict {
    let mut clusters = text.graphemes(true);
    let cluster = match (clusters.next(), clusters.next()) {
        (None, _) => return SymbolVerdict::Empty,
        (Some(_), Some(_)) => return SymbolVerdict::MultipleCharacters(2 + clusters.count()),
        (Some(cluster), None) => cluster,
    };

    let mut scalars = cluster.chars();
    let Some(first) = scalars.next() else {
        return SymbolVerdict::Empty;
    };
    let is_composed = scalars.next().is_some();

    if (is_composed && first.is_emoji_char()) || has_emoji_presentation(first) {
        SymbolVerdict::SingleEmoji
    } else {
        SymbolVerdict::NotEmoji
    }
}

/// `Emoji_Presentation=Yes`: rendered as a pictograph without a variation
/// selector.
fn has_emoji_presentation(ch: char) -> bool {
    matches!(
        ch.emoji_status(),
        EmojiStatus::EmojiPresentation
            | EmojiStatus::EmojiPresentationAndModifierBase
            | EmojiStatus::EmojiPresentationAndEmojiComponent
            | EmojiStatus::EmojiPresentationAndModifierAndEmojiComponent
    )
}

#[cfg(test)]
mod tests {
    use super::{classify_symbol, has_emoji_presentation, SymbolVerdict};

    #[test]
    fn presentation_property_distinguishes_text_default_symbols() {
        assert!(has_emoji_presentation('😀'));
        assert!(has_emoji_presentation('\u{26FA}'));
        assert!(!has_emoji_presentation('\u{2764}'));
        assert!(!has_emoji_presentation('1'));
        assert!(!has_emoji_presentation('a'));
    }

    #[test]
    fn classify_reports_cluster_count_for_long_input() {
        assert_eq!(
            classify_symbol("🐢🐘🍝"),
            SymbolVerdict::MultipleCharacters(3)
        );
        assert_eq!(classify_symbol(""), SymbolVerdict::Empty);
        assert_eq!(classify_symbol("x"), SymbolVerdict::NotEmoji);
    }
}
