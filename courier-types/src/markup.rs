//! Reply markup, keyboards, parse modes and text entities.

use serde::{Deserialize, Serialize};

use crate::chat::User;
use crate::validate::{Validate, ValidationErrors};

// ─── ParseMode ───────────────────────────────────────────────────────────────

/// Text formatting mode. Mutually exclusive with explicit entity lists on
/// every field pair that offers both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    MarkdownV2,
    /// Legacy Markdown, kept for compatibility.
    Markdown,
    #[serde(rename = "HTML")]
    Html,
}

// ─── MessageEntity ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Mention,
    Hashtag,
    BotCommand,
    Url,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Spoiler,
    Code,
    Pre,
    TextLink,
    TextMention,
    CustomEmoji,
}

/// One formatted span inside a text field, in UTF-16 code units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub offset: i64,
    pub length: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_emoji_id: Option<String>,
}

impl Validate for MessageEntity {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.at_least("offset", self.offset, 0);
        errors.at_least("length", self.length, 1);
    }
}

// ─── Keyboards ───────────────────────────────────────────────────────────────

/// A web app opened from a button.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WebAppInfo {
    pub url: String,
}

impl Validate for WebAppInfo {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.non_empty("url", &self.url);
    }
}

/// One button of an inline keyboard. Exactly one action field must be set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_app: Option<WebAppInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay: Option<bool>,
}

impl InlineKeyboardButton {
    /// A button that opens `url`.
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self { text: text.into(), url: Some(url.into()), ..Default::default() }
    }

    /// A button that sends `data` back in a callback query.
    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self { text: text.into(), callback_data: Some(data.into()), ..Default::default() }
    }

    /// The pay button; must be the first button of an invoice's first row.
    pub fn pay(text: impl Into<String>) -> Self {
        Self { text: text.into(), pay: Some(true), ..Default::default() }
    }
}

impl Validate for InlineKeyboardButton {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.non_empty("text", &self.text);
        if let Some(data) = &self.callback_data {
            errors.byte_bounds("callback_data", data, 1, 64);
        }
        let actions = usize::from(self.url.is_some())
            + usize::from(self.callback_data.is_some())
            + usize::from(self.web_app.is_some())
            + usize::from(self.pay.is_some());
        if actions != 1 {
            errors.push("text", format!("exactly one action field must be set, got {actions}"));
        }
        if let Some(app) = &self.web_app {
            errors.nested("web_app", app);
        }
    }
}

/// An inline keyboard attached to a message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    pub fn new(rows: Vec<Vec<InlineKeyboardButton>>) -> Self {
        Self { inline_keyboard: rows }
    }

    /// A single-row keyboard.
    pub fn row(buttons: Vec<InlineKeyboardButton>) -> Self {
        Self { inline_keyboard: vec![buttons] }
    }
}

impl Validate for InlineKeyboardMarkup {
    fn check(&self, errors: &mut ValidationErrors) {
        for (i, row) in self.inline_keyboard.iter().enumerate() {
            errors.nested_each(&format!("inline_keyboard[{i}]"), row);
        }
    }
}

/// One button of a reply keyboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyboardButton {
    pub text: String,
}

impl Validate for KeyboardButton {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.non_empty("text", &self.text);
    }
}

/// A custom reply keyboard shown instead of the device keyboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_persistent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_keyboard: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_time_keyboard: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

impl Validate for ReplyKeyboardMarkup {
    fn check(&self, errors: &mut ValidationErrors) {
        for (i, row) in self.keyboard.iter().enumerate() {
            errors.nested_each(&format!("keyboard[{i}]"), row);
        }
    }
}

/// Removes the custom keyboard. `remove_keyboard` is always `true` on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplyKeyboardRemove {
    pub remove_keyboard: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

impl Default for ReplyKeyboardRemove {
    fn default() -> Self {
        Self { remove_keyboard: true, selective: None }
    }
}

/// Forces a reply interface on the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForceReply {
    pub force_reply: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_field_placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

impl Default for ForceReply {
    fn default() -> Self {
        Self { force_reply: true, input_field_placeholder: None, selective: None }
    }
}

impl Validate for ForceReply {
    fn check(&self, errors: &mut ValidationErrors) {
        if let Some(placeholder) = &self.input_field_placeholder {
            errors.char_bounds("input_field_placeholder", placeholder, 1, 64);
        }
    }
}

// ─── ReplyMarkup ─────────────────────────────────────────────────────────────

/// Any of the four markup shapes a send-style method accepts.
///
/// Untagged: each variant already has a distinctive field set on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
    InlineKeyboard(InlineKeyboardMarkup),
    ReplyKeyboard(ReplyKeyboardMarkup),
    ReplyKeyboardRemove(ReplyKeyboardRemove),
    ForceReply(ForceReply),
}

impl From<InlineKeyboardMarkup> for ReplyMarkup {
    fn from(markup: InlineKeyboardMarkup) -> Self {
        Self::InlineKeyboard(markup)
    }
}

impl Validate for ReplyMarkup {
    fn check(&self, errors: &mut ValidationErrors) {
        match self {
            Self::InlineKeyboard(m) => m.check(errors),
            Self::ReplyKeyboard(m) => m.check(errors),
            Self::ReplyKeyboardRemove(_) => {}
            Self::ForceReply(m) => m.check(errors),
        }
    }
}
