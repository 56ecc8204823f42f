//! Chat addressing and the core response objects.

use serde::{Deserialize, Serialize};

use crate::stickers::Sticker;
use crate::validate::{Validate, ValidationErrors};

// ─── ChatRef ─────────────────────────────────────────────────────────────────

/// A chat, addressed either by numeric id or by `@username`.
///
/// Serializes untagged: the integer branch as a JSON number, the username
/// branch as a string — the two shapes the `chat_id` wire field accepts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatRef {
    Id(i64),
    Username(String),
}

impl From<i64> for ChatRef {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<String> for ChatRef {
    fn from(username: String) -> Self {
        Self::Username(username)
    }
}

impl From<&str> for ChatRef {
    fn from(username: &str) -> Self {
        Self::Username(username.to_string())
    }
}

impl Validate for ChatRef {
    fn check(&self, errors: &mut ValidationErrors) {
        match self {
            // Known limitation: channel/supergroup ids are negative and are
            // rejected here. Address those chats by @username.
            Self::Id(id) => errors.at_least("chat_id", *id, 1),
            Self::Username(name) => errors.non_empty("chat_id", name),
        }
    }
}

// ─── Response objects ────────────────────────────────────────────────────────

/// A Telegram user or bot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
}

/// What kind of chat a [`Chat`] is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatKind {
    Private,
    Group,
    Supergroup,
    Channel,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ChatKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
}

/// A message, reduced to the fields the implemented methods return.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i64,
    /// Unix time the message was sent.
    pub date: i64,
    pub chat: Chat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticker: Option<Sticker>,
}

/// A file ready to be downloaded, as returned by `uploadStickerFile`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct File {
    pub file_id: String,
    pub file_unique_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

/// One size of a photo or thumbnail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhotoSize {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: i64,
    pub height: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}
