//! Inline query result types.
//!
//! Only the result shapes exercised by the implemented methods are modeled:
//! articles, photos by URL, and cached stickers. Each variant validates its
//! own constraints and delegates into nested content.

use serde::{Deserialize, Serialize};

use crate::markup::{InlineKeyboardMarkup, MessageEntity, ParseMode, WebAppInfo};
use crate::validate::{Validate, ValidationErrors};

// ─── InputMessageContent ─────────────────────────────────────────────────────

/// Content of the message sent when an inline result is chosen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputMessageContent {
    Text(InputTextMessageContent),
}

impl Validate for InputMessageContent {
    fn check(&self, errors: &mut ValidationErrors) {
        match self {
            Self::Text(c) => c.check(errors),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputTextMessageContent {
    pub message_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<MessageEntity>>,
}

impl InputTextMessageContent {
    pub fn new(message_text: impl Into<String>) -> Self {
        Self { message_text: message_text.into(), parse_mode: None, entities: None }
    }
}

impl Validate for InputTextMessageContent {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.char_bounds("message_text", &self.message_text, 1, 4096);
        errors.mutually_exclusive(
            "parse_mode",
            "entities",
            self.parse_mode.is_some(),
            self.entities.is_some(),
        );
        if let Some(entities) = &self.entities {
            errors.nested_each("entities", entities);
        }
    }
}

// ─── Result variants ─────────────────────────────────────────────────────────

/// A link result rendered as an article.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultArticle {
    pub id: String,
    pub title: String,
    pub input_message_content: InputMessageContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl Validate for InlineQueryResultArticle {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.byte_bounds("id", &self.id, 1, 64);
        errors.non_empty("title", &self.title);
        errors.nested("input_message_content", &self.input_message_content);
        if let Some(markup) = &self.reply_markup {
            errors.nested("reply_markup", markup);
        }
    }
}

/// A photo result fetched by URL.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultPhoto {
    pub id: String,
    pub photo_url: String,
    pub thumbnail_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

impl Validate for InlineQueryResultPhoto {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.byte_bounds("id", &self.id, 1, 64);
        errors.non_empty("photo_url", &self.photo_url);
        errors.non_empty("thumbnail_url", &self.thumbnail_url);
        if let Some(caption) = &self.caption {
            errors.char_bounds("caption", caption, 0, 1024);
        }
        errors.mutually_exclusive(
            "parse_mode",
            "caption_entities",
            self.parse_mode.is_some(),
            self.caption_entities.is_some(),
        );
        if let Some(entities) = &self.caption_entities {
            errors.nested_each("caption_entities", entities);
        }
        if let Some(content) = &self.input_message_content {
            errors.nested("input_message_content", content);
        }
    }
}

/// A sticker already on the servers, referenced by file id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultCachedSticker {
    pub id: String,
    pub sticker_file_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

impl Validate for InlineQueryResultCachedSticker {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.byte_bounds("id", &self.id, 1, 64);
        errors.non_empty("sticker_file_id", &self.sticker_file_id);
        if let Some(content) = &self.input_message_content {
            errors.nested("input_message_content", content);
        }
    }
}

// ─── InlineQueryResult ───────────────────────────────────────────────────────

/// One result offered in reply to an inline query.
///
/// Tagged by the wire `type` field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineQueryResult {
    Article(InlineQueryResultArticle),
    Photo(InlineQueryResultPhoto),
    #[serde(rename = "sticker")]
    CachedSticker(InlineQueryResultCachedSticker),
}

impl Validate for InlineQueryResult {
    fn check(&self, errors: &mut ValidationErrors) {
        match self {
            Self::Article(r) => r.check(errors),
            Self::Photo(r) => r.check(errors),
            Self::CachedSticker(r) => r.check(errors),
        }
    }
}

// ─── InlineQueryResultsButton ────────────────────────────────────────────────

/// The button shown above inline results. Exactly one of `web_app` and
/// `start_parameter` must be set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultsButton {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_app: Option<WebAppInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_parameter: Option<String>,
}

impl Validate for InlineQueryResultsButton {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.non_empty("text", &self.text);
        match (&self.web_app, &self.start_parameter) {
            (Some(_), Some(_)) => {
                errors.push("web_app", "cannot be combined with start_parameter");
            }
            (None, None) => {
                errors.push("web_app", "either web_app or start_parameter is required");
            }
            (Some(app), None) => errors.nested("web_app", app),
            (None, Some(param)) => {
                errors.char_bounds("start_parameter", param, 1, 64);
                if !param.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
                    errors.push(
                        "start_parameter",
                        "may only contain letters, digits, underscores and dashes",
                    );
                }
            }
        }
    }
}
