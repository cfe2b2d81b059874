//! Seed records shown when no dictionary has been persisted yet.

use crate::model::emoji::{EmojiId, EmojiRecord};
use uuid::Uuid;

/// Number of records in the seed set.
pub const SAMPLE_COUNT: usize = 13;

// Seed ids are `SAMPLE_ID_BASE + position`, so the fallback list compares
// equal across runs.
const SAMPLE_ID_BASE: u128 = 0x5eed_0000_0000_4000_8000_0000_0000_0000;

/// (symbol, name, description, usage)
const SAMPLES: [(&str, &str, &str, &str); SAMPLE_COUNT] = [
    ("😀", "Grinning Face", "A typical smiley face.", "happiness"),
    (
        "😕",
        "Confused Face",
        "A confused, puzzled face.",
        "unsure what to think; displeasure",
    ),
    (
        "😍",
        "Heart Eyes",
        "A smiley face with hearts for eyes.",
        "love of something; attractive",
    ),
    (
        "\u{1F9D1}\u{200D}\u{1F4BB}",
        "Developer",
        "A person working on a MacBook (probably using Xcode to write iOS apps in Swift).",
        "apps, software, programming",
    ),
    ("🐢", "Turtle", "A cute turtle.", "something slow"),
    ("🐘", "Elephant", "A gray elephant.", "good memory"),
    ("🍝", "Spaghetti", "A plate of spaghetti.", "spaghetti"),
    ("🎲", "Die", "A single die.", "taking a risk, chance; game"),
    ("\u{26FA}\u{FE0F}", "Tent", "A small tent.", "camping"),
    (
        "📚",
        "Stack of Books",
        "Three colored books stacked on each other.",
        "homework, studying",
    ),
    ("💔", "Broken Heart", "A red, broken heart.", "extreme sadness"),
    ("💤", "Snore", "Three blue 'z's.", "tired, sleepiness"),
    (
        "🏁",
        "Checkered Flag",
        "A black-and-white checkered flag.",
        "completion",
    ),
];

/// Returns the fixed, ordered seed set.
pub fn sample_records() -> Vec<EmojiRecord> {
    SAMPLES
        .iter()
        .enumerate()
        .map(|(index, (symbol, name, description, usage))| {
            EmojiRecord::with_id(sample_id(index), *symbol, *name, *description, *usage)
        })
        .collect()
}

fn sample_id(index: usize) -> EmojiId {
    EmojiId::from_uuid(Uuid::from_u128(SAMPLE_ID_BASE + index as u128))
}
