//! Sticker methods.

use std::collections::HashSet;

use serde::Serialize;

use crate::Method;
use crate::chat::{ChatRef, File, Message};
use crate::input_file::{Attachment, InputFile, field_attachment};
use crate::markup::ReplyMarkup;
use crate::stickers::{InputSticker, MaskPosition, Sticker, StickerFormat, StickerSet, StickerType};
use crate::validate::{Validate, ValidationErrors};

// ─── SendSticker ─────────────────────────────────────────────────────────────

/// Send a static, animated or video sticker.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendSticker {
    pub chat_id: ChatRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,
    /// File id, URL (.WEBP only), or raw upload (.WEBP/.TGS/.WEBM).
    pub sticker: InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendSticker {
    pub fn new(chat_id: impl Into<ChatRef>, sticker: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_thread_id: None,
            sticker,
            emoji: None,
            disable_notification: None,
            protect_content: None,
            reply_markup: None,
        }
    }

    /// Emoji shown for uploaded stickers.
    pub fn emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into()); self
    }

    /// Send silently (no notification sound).
    pub fn disable_notification(mut self, v: bool) -> Self {
        self.disable_notification = Some(v); self
    }

    pub fn protect_content(mut self, v: bool) -> Self {
        self.protect_content = Some(v); self
    }

    pub fn reply_markup(mut self, markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(markup.into()); self
    }
}

impl Validate for SendSticker {
    fn check(&self, errors: &mut ValidationErrors) {
        self.chat_id.check(errors);
        errors.nested("sticker", &self.sticker);
        if let Some(markup) = &self.reply_markup {
            errors.nested("reply_markup", markup);
        }
    }
}

impl Method for SendSticker {
    type Return = Message;
    const ENDPOINT: &'static str = "sendSticker";

    fn attachments(&self) -> Vec<Attachment<'_>> {
        field_attachment("sticker", &self.sticker).into_iter().collect()
    }
}

// ─── GetStickerSet ───────────────────────────────────────────────────────────

/// Fetch a sticker set by name.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GetStickerSet {
    pub name: String,
}

impl GetStickerSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Validate for GetStickerSet {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.sticker_set_name("name", &self.name);
    }
}

impl Method for GetStickerSet {
    type Return = StickerSet;
    const ENDPOINT: &'static str = "getStickerSet";
}

// ─── GetCustomEmojiStickers ──────────────────────────────────────────────────

/// Look up custom emoji stickers by their ids.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GetCustomEmojiStickers {
    pub custom_emoji_ids: Vec<String>,
}

impl GetCustomEmojiStickers {
    pub fn new(custom_emoji_ids: Vec<String>) -> Self {
        Self { custom_emoji_ids }
    }
}

impl Validate for GetCustomEmojiStickers {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.list_bounds("custom_emoji_ids", self.custom_emoji_ids.len(), 1, 200);
        for (i, id) in self.custom_emoji_ids.iter().enumerate() {
            errors.non_empty(&format!("custom_emoji_ids[{i}]"), id);
        }
    }
}

impl Method for GetCustomEmojiStickers {
    type Return = Vec<Sticker>;
    const ENDPOINT: &'static str = "getCustomEmojiStickers";
}

// ─── UploadStickerFile ───────────────────────────────────────────────────────

/// Upload a sticker file for later use in set creation; the returned
/// [`File`] can be reused any number of times.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UploadStickerFile {
    pub user_id: i64,
    /// Must be a raw upload; ids and URLs are rejected locally.
    pub sticker: InputFile,
    pub sticker_format: StickerFormat,
}

impl UploadStickerFile {
    pub fn new(user_id: i64, sticker: InputFile, sticker_format: StickerFormat) -> Self {
        Self { user_id, sticker, sticker_format }
    }
}

impl Validate for UploadStickerFile {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.at_least("user_id", self.user_id, 1);
        if self.sticker.needs_upload() {
            errors.nested("sticker", &self.sticker);
        } else {
            errors.push("sticker", "must be a raw upload, not a file id or URL");
        }
    }
}

impl Method for UploadStickerFile {
    type Return = File;
    const ENDPOINT: &'static str = "uploadStickerFile";

    fn attachments(&self) -> Vec<Attachment<'_>> {
        field_attachment("sticker", &self.sticker).into_iter().collect()
    }
}

// ─── CreateNewStickerSet ─────────────────────────────────────────────────────

/// Create a sticker set owned by a user.
///
/// Set names are fixed forever once created; they must start with a letter
/// and may not contain consecutive underscores.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateNewStickerSet {
    pub user_id: i64,
    pub name: String,
    pub title: String,
    pub stickers: Vec<InputSticker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticker_type: Option<StickerType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_repainting: Option<bool>,
}

impl CreateNewStickerSet {
    pub fn new(
        user_id: i64,
        name: impl Into<String>,
        title: impl Into<String>,
        stickers: Vec<InputSticker>,
    ) -> Self {
        Self {
            user_id,
            name: name.into(),
            title: title.into(),
            stickers,
            sticker_type: None,
            needs_repainting: None,
        }
    }

    pub fn sticker_type(mut self, kind: StickerType) -> Self {
        self.sticker_type = Some(kind); self
    }

    pub fn needs_repainting(mut self, v: bool) -> Self {
        self.needs_repainting = Some(v); self
    }
}

impl Validate for CreateNewStickerSet {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.at_least("user_id", self.user_id, 1);
        errors.sticker_set_name("name", &self.name);
        errors.char_bounds("title", &self.title, 1, 64);
        errors.list_bounds("stickers", self.stickers.len(), 1, 50);
        errors.nested_each("stickers", &self.stickers);

        // Uploads nested in the stickers list become multipart parts named
        // by their file name; duplicates would silently shadow each other.
        let mut seen = HashSet::new();
        for sticker in &self.stickers {
            if let Some(upload) = sticker.sticker.as_upload() {
                if !seen.insert(upload.file_name.as_str()) {
                    errors.push(
                        "stickers",
                        format!("duplicate upload file name \"{}\"", upload.file_name),
                    );
                }
            }
        }
    }
}

impl Method for CreateNewStickerSet {
    type Return = bool;
    const ENDPOINT: &'static str = "createNewStickerSet";

    fn attachments(&self) -> Vec<Attachment<'_>> {
        self.stickers
            .iter()
            .filter_map(|s| s.sticker.as_upload())
            .map(|f| Attachment::new(f.file_name.clone(), f))
            .collect()
    }
}

// ─── AddStickerToSet ─────────────────────────────────────────────────────────

/// Add one sticker to an existing set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AddStickerToSet {
    pub user_id: i64,
    pub name: String,
    pub sticker: InputSticker,
}

impl AddStickerToSet {
    pub fn new(user_id: i64, name: impl Into<String>, sticker: InputSticker) -> Self {
        Self { user_id, name: name.into(), sticker }
    }
}

impl Validate for AddStickerToSet {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.at_least("user_id", self.user_id, 1);
        errors.sticker_set_name("name", &self.name);
        errors.nested("sticker", &self.sticker);
    }
}

impl Method for AddStickerToSet {
    type Return = bool;
    const ENDPOINT: &'static str = "addStickerToSet";

    fn attachments(&self) -> Vec<Attachment<'_>> {
        // The sticker is embedded as a JSON form field, so its upload is
        // referenced by file name via attach://.
        self.sticker
            .sticker
            .as_upload()
            .map(|f| Attachment::new(f.file_name.clone(), f))
            .into_iter()
            .collect()
    }
}

// ─── Per-sticker maintenance ─────────────────────────────────────────────────

/// Move a sticker to a new position in its set (zero-based).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SetStickerPositionInSet {
    /// File id of the sticker to move.
    pub sticker: String,
    pub position: i64,
}

impl SetStickerPositionInSet {
    pub fn new(sticker: impl Into<String>, position: i64) -> Self {
        Self { sticker: sticker.into(), position }
    }
}

impl Validate for SetStickerPositionInSet {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.non_empty("sticker", &self.sticker);
        errors.at_least("position", self.position, 0);
    }
}

impl Method for SetStickerPositionInSet {
    type Return = bool;
    const ENDPOINT: &'static str = "setStickerPositionInSet";
}

/// Remove a sticker from its set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeleteStickerFromSet {
    pub sticker: String,
}

impl DeleteStickerFromSet {
    pub fn new(sticker: impl Into<String>) -> Self {
        Self { sticker: sticker.into() }
    }
}

impl Validate for DeleteStickerFromSet {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.non_empty("sticker", &self.sticker);
    }
}

impl Method for DeleteStickerFromSet {
    type Return = bool;
    const ENDPOINT: &'static str = "deleteStickerFromSet";
}

/// Replace the emoji assigned to a sticker the bot owns.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SetStickerEmojiList {
    pub sticker: String,
    pub emoji_list: Vec<String>,
}

impl SetStickerEmojiList {
    pub fn new(sticker: impl Into<String>, emoji_list: Vec<String>) -> Self {
        Self { sticker: sticker.into(), emoji_list }
    }
}

impl Validate for SetStickerEmojiList {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.non_empty("sticker", &self.sticker);
        errors.list_bounds("emoji_list", self.emoji_list.len(), 1, 20);
    }
}

impl Method for SetStickerEmojiList {
    type Return = bool;
    const ENDPOINT: &'static str = "setStickerEmojiList";
}

/// Replace the search keywords of a sticker the bot owns.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SetStickerKeywords {
    pub sticker: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

impl SetStickerKeywords {
    pub fn new(sticker: impl Into<String>) -> Self {
        Self { sticker: sticker.into(), keywords: None }
    }

    pub fn keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = Some(keywords); self
    }
}

impl Validate for SetStickerKeywords {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.non_empty("sticker", &self.sticker);
        if let Some(keywords) = &self.keywords {
            errors.list_bounds("keywords", keywords.len(), 0, 20);
        }
    }
}

impl Method for SetStickerKeywords {
    type Return = bool;
    const ENDPOINT: &'static str = "setStickerKeywords";
}

/// Change the mask position of a mask sticker. Omit the position to clear it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SetStickerMaskPosition {
    pub sticker: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_position: Option<MaskPosition>,
}

impl SetStickerMaskPosition {
    pub fn new(sticker: impl Into<String>) -> Self {
        Self { sticker: sticker.into(), mask_position: None }
    }

    pub fn mask_position(mut self, position: MaskPosition) -> Self {
        self.mask_position = Some(position); self
    }
}

impl Validate for SetStickerMaskPosition {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.non_empty("sticker", &self.sticker);
        if let Some(position) = &self.mask_position {
            errors.nested("mask_position", position);
        }
    }
}

impl Method for SetStickerMaskPosition {
    type Return = bool;
    const ENDPOINT: &'static str = "setStickerMaskPosition";
}

// ─── Set-level maintenance ───────────────────────────────────────────────────

/// Rename a sticker set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SetStickerSetTitle {
    pub name: String,
    pub title: String,
}

impl SetStickerSetTitle {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self { name: name.into(), title: title.into() }
    }
}

impl Validate for SetStickerSetTitle {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.sticker_set_name("name", &self.name);
        errors.char_bounds("title", &self.title, 1, 64);
    }
}

impl Method for SetStickerSetTitle {
    type Return = bool;
    const ENDPOINT: &'static str = "setStickerSetTitle";
}

/// Set or clear a sticker set's thumbnail.
///
/// The thumbnail may be a file id, a URL, or a raw upload; the transport is
/// chosen accordingly.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SetStickerSetThumbnail {
    pub name: String,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<InputFile>,
    pub format: StickerFormat,
}

impl SetStickerSetThumbnail {
    pub fn new(name: impl Into<String>, user_id: i64, format: StickerFormat) -> Self {
        Self { name: name.into(), user_id, thumbnail: None, format }
    }

    pub fn thumbnail(mut self, thumbnail: InputFile) -> Self {
        self.thumbnail = Some(thumbnail); self
    }
}

impl Validate for SetStickerSetThumbnail {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.sticker_set_name("name", &self.name);
        errors.at_least("user_id", self.user_id, 1);
        if let Some(thumbnail) = &self.thumbnail {
            errors.nested("thumbnail", thumbnail);
        }
    }
}

impl Method for SetStickerSetThumbnail {
    type Return = bool;
    const ENDPOINT: &'static str = "setStickerSetThumbnail";

    fn attachments(&self) -> Vec<Attachment<'_>> {
        self.thumbnail
            .as_ref()
            .and_then(|t| field_attachment("thumbnail", t))
            .into_iter()
            .collect()
    }
}

/// Delete a sticker set the bot created.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeleteStickerSet {
    pub name: String,
}

impl DeleteStickerSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Validate for DeleteStickerSet {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.sticker_set_name("name", &self.name);
    }
}

impl Method for DeleteStickerSet {
    type Return = bool;
    const ENDPOINT: &'static str = "deleteStickerSet";
}
