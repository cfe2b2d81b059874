use emojidex_core::{sample_records, DraftError, EmojiDraft, EmojiId, EmojiRecord, SAMPLE_COUNT};
use uuid::Uuid;

#[test]
fn record_new_assigns_distinct_ids() {
    let first = EmojiRecord::new("🔥", "Fire", "A flame.", "hot");
    let second = EmojiRecord::new("🔥", "Fire", "A flame.", "hot");

    assert!(!first.id().as_uuid().is_nil());
    assert_ne!(first.id(), second.id());
    assert_ne!(first, second);
}

#[test]
fn revised_keeps_id_and_replaces_content() {
    let original = EmojiRecord::new("🐢", "Turtle", "A cute turtle.", "something slow");
    let draft = EmojiDraft::new("🐌", "Snail", "A slow snail.", "very slow");

    let revised = original.revised(draft);

    assert_eq!(revised.id(), original.id());
    assert_eq!(revised.symbol, "🐌");
    assert_eq!(revised.name, "Snail");
    assert_eq!(revised.description, "A slow snail.");
    assert_eq!(revised.usage, "very slow");
}

#[test]
fn draft_from_record_prefills_every_field() {
    let record = EmojiRecord::new("🍝", "Spaghetti", "A plate of spaghetti.", "spaghetti");
    let draft = EmojiDraft::from(&record);

    assert_eq!(
        draft,
        EmojiDraft::new("🍝", "Spaghetti", "A plate of spaghetti.", "spaghetti")
    );
    assert!(draft.is_savable());
}

#[test]
fn draft_validation_reports_first_blocking_field() {
    let valid = EmojiDraft::new("🔥", "Fire", "A flame.", "hot");
    assert_eq!(valid.validate(), Ok(()));

    let cases = [
        (EmojiDraft::new("", "Fire", "A flame.", "hot"), DraftError::NotSingleEmoji),
        (EmojiDraft::new("🔥🔥", "Fire", "A flame.", "hot"), DraftError::NotSingleEmoji),
        (EmojiDraft::new("F", "Fire", "A flame.", "hot"), DraftError::NotSingleEmoji),
        (EmojiDraft::new("🔥", "", "", ""), DraftError::EmptyName),
        (EmojiDraft::new("🔥", "Fire", "", ""), DraftError::EmptyDescription),
        (EmojiDraft::new("🔥", "Fire", "A flame.", ""), DraftError::EmptyUsage),
    ];
    for (draft, expected) in cases {
        assert_eq!(draft.validate(), Err(expected), "draft: {draft:?}");
        assert!(!draft.is_savable());
    }
}

#[test]
fn default_draft_is_not_savable() {
    assert_eq!(EmojiDraft::default().validate(), Err(DraftError::NotSingleEmoji));
}

#[test]
fn into_record_rejects_invalid_draft_and_accepts_valid_one() {
    let err = EmojiDraft::new("🔥", "Fire", "A flame.", "")
        .into_record()
        .unwrap_err();
    assert_eq!(err, DraftError::EmptyUsage);

    let record = EmojiDraft::new("🔥", "Fire", "A flame.", "hot")
        .into_record()
        .unwrap();
    assert_eq!(record.symbol, "🔥");
    assert_eq!(record.usage, "hot");
}

#[test]
fn record_serialization_uses_expected_wire_fields() {
    let id = EmojiId::from_uuid(Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap());
    let record = EmojiRecord::with_id(id, "🎲", "Die", "A single die.", "taking a risk, chance; game");

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], "11111111-2222-4333-8444-555555555555");
    assert_eq!(json["symbol"], "🎲");
    assert_eq!(json["name"], "Die");
    assert_eq!(json["description"], "A single die.");
    assert_eq!(json["usage"], "taking a risk, chance; game");

    let decoded: EmojiRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn record_without_id_gets_one_on_deserialize() {
    let value = serde_json::json!({
        "symbol": "💤",
        "name": "Snore",
        "description": "Three blue 'z's.",
        "usage": "tired, sleepiness"
    });

    let record: EmojiRecord = serde_json::from_value(value).unwrap();
    assert!(!record.id().as_uuid().is_nil());
    assert_eq!(record.name, "Snore");
}

#[test]
fn sample_set_is_fixed_and_ordered() {
    let samples = sample_records();

    assert_eq!(samples.len(), SAMPLE_COUNT);
    assert_eq!(samples.len(), 13);
    assert_eq!(samples, sample_records());
    assert_eq!(samples[0].symbol, "😀");
    assert_eq!(samples[0].name, "Grinning Face");
    assert_eq!(samples[3].name, "Developer");
    assert_eq!(samples[12].symbol, "🏁");
    assert_eq!(samples[12].name, "Checkered Flag");
}
