use courier_types::chat::ChatRef;
use courier_types::inline::{InlineQueryResultsButton, InputTextMessageContent};
use courier_types::input_file::InputFile;
use courier_types::markup::{InlineKeyboardButton, WebAppInfo};
use courier_types::methods::gifts::SendGift;
use courier_types::methods::inline::AnswerInlineQuery;
use courier_types::methods::payments::{AnswerShippingQuery, SendInvoice};
use courier_types::methods::stickers::{
    CreateNewStickerSet, GetStickerSet, SetStickerEmojiList, UploadStickerFile,
};
use courier_types::payments::{LabeledPrice, ShippingOption};
use courier_types::stickers::{InputSticker, StickerFormat};
use courier_types::{ParseMode, Validate};

fn valid_invoice() -> SendInvoice {
    SendInvoice::new(
        ChatRef::Id(123456789),
        "Pro plan",
        "One month of the pro plan",
        "order-1",
        "USD",
        vec![LabeledPrice::new("Pro plan", 990)],
    )
}

fn fields(err: &courier_types::ValidationErrors) -> Vec<String> {
    err.iter().map(|v| v.field.clone()).collect()
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[test]
fn validate_is_deterministic() {
    let req = valid_invoice().suggested_tip_amounts(vec![20, 10]);
    let first = req.validate();
    let second = req.validate();
    assert_eq!(first, second);
}

// ── Length bounds ─────────────────────────────────────────────────────────────

#[test]
fn title_boundaries() {
    let mut req = valid_invoice();
    req.title = "x".repeat(32);
    assert!(req.validate().is_ok());

    req.title = "x".repeat(33);
    assert!(req.validate().is_err());

    req.title = String::new();
    assert!(req.validate().is_err());
}

#[test]
fn description_boundaries() {
    let mut req = valid_invoice();
    req.description = "d".repeat(255);
    assert!(req.validate().is_ok());

    req.description = "d".repeat(256);
    assert!(req.validate().is_err());
}

// ── Byte-size bounds ──────────────────────────────────────────────────────────

#[test]
fn payload_counts_utf8_bytes_not_chars() {
    let mut req = valid_invoice();
    req.payload = "a".repeat(128); // 128 bytes
    assert!(req.validate().is_ok());

    // 65 two-byte characters: 65 chars but 130 encoded bytes.
    req.payload = "é".repeat(65);
    assert!(req.validate().is_err());
}

#[test]
fn next_offset_byte_bound() {
    let ok = AnswerInlineQuery::new("q1", vec![]).next_offset("o".repeat(64));
    assert!(ok.validate().is_ok());

    let too_long = AnswerInlineQuery::new("q1", vec![]).next_offset("o".repeat(65));
    assert!(too_long.validate().is_err());
}

#[test]
fn callback_data_byte_bound() {
    let ok = InlineKeyboardButton::callback("Go", "d".repeat(64));
    assert!(ok.validate().is_ok());

    let too_long = InlineKeyboardButton::callback("Go", "d".repeat(65));
    assert!(too_long.validate().is_err());
}

// ── Suggested tip amounts ─────────────────────────────────────────────────────

#[test]
fn increasing_tips_under_ceiling_pass() {
    let req = valid_invoice()
        .max_tip_amount(50)
        .suggested_tip_amounts(vec![10, 20, 30]);
    assert!(req.validate().is_ok());
}

#[test]
fn non_increasing_tips_fail() {
    let req = valid_invoice().suggested_tip_amounts(vec![20, 10]);
    assert!(req.validate().is_err());
}

#[test]
fn negative_tips_fail() {
    let req = valid_invoice().suggested_tip_amounts(vec![-5, 10]);
    assert!(req.validate().is_err());
}

#[test]
fn more_than_four_tips_fail() {
    let req = valid_invoice().suggested_tip_amounts(vec![1, 2, 3, 4, 5]);
    assert!(req.validate().is_err());
}

#[test]
fn tips_above_ceiling_fail() {
    let req = valid_invoice()
        .max_tip_amount(25)
        .suggested_tip_amounts(vec![10, 30]);
    assert!(req.validate().is_err());
}

// ── Sticker set names ─────────────────────────────────────────────────────────

#[test]
fn well_formed_set_name_passes() {
    assert!(GetStickerSet::new("cats_by_mybot").validate().is_ok());
}

#[test]
fn set_name_must_start_with_letter() {
    assert!(GetStickerSet::new("1cats").validate().is_err());
}

#[test]
fn set_name_rejects_consecutive_underscores() {
    assert!(GetStickerSet::new("ca__ts").validate().is_err());
}

#[test]
fn set_name_length_boundary() {
    assert!(GetStickerSet::new("c".repeat(64)).validate().is_ok());
    assert!(GetStickerSet::new("c".repeat(65)).validate().is_err());
}

#[test]
fn set_name_rejects_other_characters() {
    assert!(GetStickerSet::new("cats-by-mybot").validate().is_err());
}

// ── Mutual exclusivity ────────────────────────────────────────────────────────

#[test]
fn parse_mode_and_entities_conflict() {
    let req = SendGift::to_user(42, "gift-1")
        .text("congrats")
        .text_parse_mode(ParseMode::MarkdownV2)
        .text_entities(vec![]);
    assert!(req.validate().is_err());
}

#[test]
fn parse_mode_alone_is_fine() {
    let req = SendGift::to_user(42, "gift-1")
        .text("congrats")
        .text_parse_mode(ParseMode::MarkdownV2);
    assert!(req.validate().is_ok());
}

#[test]
fn text_content_parse_mode_conflict() {
    let mut content = InputTextMessageContent::new("hello");
    content.parse_mode = Some(ParseMode::Html);
    content.entities = Some(vec![]);
    assert!(content.validate().is_err());
}

// ── Cross-field requirements ──────────────────────────────────────────────────

#[test]
fn shipping_decline_requires_error_message() {
    let mut req = AnswerShippingQuery::decline("sq1", "no delivery to your region");
    assert!(req.validate().is_ok());

    req.error_message = None;
    let err = req.validate().unwrap_err();
    assert!(fields(&err).contains(&"error_message".to_string()));
}

#[test]
fn shipping_accept_requires_options() {
    let option = ShippingOption::new("std", "Standard", vec![LabeledPrice::new("Shipping", 500)]);
    let mut req = AnswerShippingQuery::accept("sq1", vec![option]);
    assert!(req.validate().is_ok());

    req.shipping_options = None;
    assert!(req.validate().is_err());
}

#[test]
fn gift_needs_exactly_one_receiver() {
    let mut both = SendGift::to_user(42, "gift-1");
    both.chat_id = Some(ChatRef::Username("@channel".into()));
    assert!(both.validate().is_err());

    let mut neither = SendGift::to_user(42, "gift-1");
    neither.user_id = None;
    assert!(neither.validate().is_err());
}

#[test]
fn results_button_needs_exactly_one_target() {
    let both = InlineQueryResultsButton {
        text: "Open".into(),
        web_app: Some(WebAppInfo { url: "https://example.com".into() }),
        start_parameter: Some("go".into()),
    };
    assert!(both.validate().is_err());

    let neither = InlineQueryResultsButton { text: "Open".into(), web_app: None, start_parameter: None };
    assert!(neither.validate().is_err());

    let start = InlineQueryResultsButton {
        text: "Open".into(),
        web_app: None,
        start_parameter: Some("deep_link-1".into()),
    };
    assert!(start.validate().is_ok());
}

#[test]
fn upload_sticker_file_rejects_references() {
    let by_id = UploadStickerFile::new(42, InputFile::file_id("abc"), StickerFormat::Static);
    assert!(by_id.validate().is_err());

    let upload = UploadStickerFile::new(
        42,
        InputFile::upload("sticker.webp", vec![1, 2, 3]),
        StickerFormat::Static,
    );
    assert!(upload.validate().is_ok());
}

// ── Identifier rules ──────────────────────────────────────────────────────────

#[test]
fn integer_chat_ids_below_one_fail() {
    let mut req = valid_invoice();
    req.chat_id = ChatRef::Id(0);
    assert!(req.validate().is_err());

    // Channel-style negative ids are rejected by the integer branch; this is
    // the documented limitation, not an oversight.
    req.chat_id = ChatRef::Id(-1001234567890);
    assert!(req.validate().is_err());

    req.chat_id = ChatRef::Username("@mychannel".into());
    assert!(req.validate().is_ok());
}

#[test]
fn whitespace_only_ids_fail() {
    let req = AnswerInlineQuery::new("   ", vec![]);
    assert!(req.validate().is_err());
}

// ── Cardinality ───────────────────────────────────────────────────────────────

#[test]
fn emoji_list_cardinality() {
    let ok = SetStickerEmojiList::new("file-id", vec!["😀".into(); 20]);
    assert!(ok.validate().is_ok());

    let empty = SetStickerEmojiList::new("file-id", vec![]);
    assert!(empty.validate().is_err());

    let too_many = SetStickerEmojiList::new("file-id", vec!["😀".into(); 21]);
    assert!(too_many.validate().is_err());
}

// ── Accumulation and nesting ──────────────────────────────────────────────────

#[test]
fn all_violations_reported_at_once() {
    let mut req = valid_invoice();
    req.title = String::new();
    req.payload = String::new();
    req.currency = String::new();
    req.prices = vec![];

    let err = req.validate().unwrap_err();
    let seen = fields(&err);
    assert!(seen.contains(&"title".to_string()));
    assert!(seen.contains(&"payload".to_string()));
    assert!(seen.contains(&"currency".to_string()));
    assert!(seen.contains(&"prices".to_string()));
}

#[test]
fn nested_violations_carry_indexed_paths() {
    let mut req = valid_invoice();
    req.prices = vec![
        LabeledPrice::new("Plan", 990),
        LabeledPrice::new("", 10),
    ];

    let err = req.validate().unwrap_err();
    assert!(fields(&err).contains(&"prices[1].label".to_string()));
}

#[test]
fn duplicate_upload_names_in_sticker_set_fail() {
    let sticker = |name: &str| {
        InputSticker::new(
            InputFile::upload(name, vec![0u8; 4]),
            StickerFormat::Static,
            vec!["😀".into()],
        )
    };
    let req = CreateNewStickerSet::new(
        42,
        "cats_by_mybot",
        "Cats",
        vec![sticker("a.webp"), sticker("a.webp")],
    );
    assert!(req.validate().is_err());

    let ok = CreateNewStickerSet::new(
        42,
        "cats_by_mybot",
        "Cats",
        vec![sticker("a.webp"), sticker("b.webp")],
    );
    assert!(ok.validate().is_ok());
}
