//! Sticker value objects and responses.

use serde::{Deserialize, Serialize};

use crate::chat::PhotoSize;
use crate::input_file::InputFile;
use crate::validate::{Validate, ValidationErrors};

// ─── Enumerations ────────────────────────────────────────────────────────────

/// Format of a sticker's media.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StickerFormat {
    Static,
    Animated,
    Video,
}

/// Kind of sticker set a sticker belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StickerType {
    Regular,
    Mask,
    CustomEmoji,
}

/// Face area a mask sticker is placed relative to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskPoint {
    Forehead,
    Eyes,
    Mouth,
    Chin,
}

// ─── MaskPosition ────────────────────────────────────────────────────────────

/// Placement of a mask sticker on a face.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaskPosition {
    pub point: MaskPoint,
    /// Horizontal shift in widths of the mask, left negative.
    pub x_shift: f64,
    /// Vertical shift in heights of the mask, up negative.
    pub y_shift: f64,
    pub scale: f64,
}

impl Validate for MaskPosition {
    fn check(&self, errors: &mut ValidationErrors) {
        if !self.x_shift.is_finite() {
            errors.push("x_shift", "must be finite");
        }
        if !self.y_shift.is_finite() {
            errors.push("y_shift", "must be finite");
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            errors.push("scale", "must be a positive finite number");
        }
    }
}

// ─── InputSticker ────────────────────────────────────────────────────────────

/// One sticker to add when creating or extending a set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InputSticker {
    pub sticker: InputFile,
    pub format: StickerFormat,
    pub emoji_list: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_position: Option<MaskPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

impl InputSticker {
    pub fn new(sticker: InputFile, format: StickerFormat, emoji_list: Vec<String>) -> Self {
        Self { sticker, format, emoji_list, mask_position: None, keywords: None }
    }
}

impl Validate for InputSticker {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.nested("sticker", &self.sticker);
        errors.list_bounds("emoji_list", self.emoji_list.len(), 1, 20);
        if let Some(keywords) = &self.keywords {
            errors.list_bounds("keywords", keywords.len(), 0, 20);
        }
        if let Some(mask) = &self.mask_position {
            errors.nested("mask_position", mask);
        }
    }
}

// ─── Responses ───────────────────────────────────────────────────────────────

/// A sticker as the server describes it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sticker {
    pub file_id: String,
    pub file_unique_id: String,
    #[serde(rename = "type")]
    pub kind: StickerType,
    pub width: i64,
    pub height: i64,
    pub is_animated: bool,
    pub is_video: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_position: Option<MaskPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_emoji_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PhotoSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}

/// A whole sticker set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StickerSet {
    pub name: String,
    pub title: String,
    pub sticker_type: StickerType,
    pub stickers: Vec<Sticker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PhotoSize>,
}
