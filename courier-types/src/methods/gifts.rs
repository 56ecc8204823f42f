//! Gift methods.

use serde::Serialize;

use crate::Method;
use crate::chat::ChatRef;
use crate::gifts::Gifts;
use crate::markup::{MessageEntity, ParseMode};
use crate::validate::{Validate, ValidationErrors};

// ─── SendGift ────────────────────────────────────────────────────────────────

/// Send a gift, paid from the bot's Star balance, to a user or a channel.
///
/// Exactly one of `user_id` and `chat_id` must be set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendGift {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<ChatRef>,
    pub gift_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_for_upgrade: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_entities: Option<Vec<MessageEntity>>,
}

impl SendGift {
    /// Gift to a user.
    pub fn to_user(user_id: i64, gift_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id),
            chat_id: None,
            gift_id: gift_id.into(),
            pay_for_upgrade: None,
            text: None,
            text_parse_mode: None,
            text_entities: None,
        }
    }

    /// Gift to a channel chat.
    pub fn to_chat(chat_id: impl Into<ChatRef>, gift_id: impl Into<String>) -> Self {
        Self {
            user_id: None,
            chat_id: Some(chat_id.into()),
            gift_id: gift_id.into(),
            pay_for_upgrade: None,
            text: None,
            text_parse_mode: None,
            text_entities: None,
        }
    }

    /// Pay the upgrade cost so the receiver can upgrade for free.
    pub fn pay_for_upgrade(mut self, v: bool) -> Self {
        self.pay_for_upgrade = Some(v); self
    }

    /// Message shown along with the gift.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into()); self
    }

    pub fn text_parse_mode(mut self, mode: ParseMode) -> Self {
        self.text_parse_mode = Some(mode); self
    }

    pub fn text_entities(mut self, entities: Vec<MessageEntity>) -> Self {
        self.text_entities = Some(entities); self
    }
}

impl Validate for SendGift {
    fn check(&self, errors: &mut ValidationErrors) {
        match (self.user_id, &self.chat_id) {
            (Some(_), Some(_)) => errors.push("user_id", "cannot be combined with chat_id"),
            (None, None) => errors.push("user_id", "either user_id or chat_id is required"),
            (Some(user_id), None) => errors.at_least("user_id", user_id, 1),
            (None, Some(chat_id)) => chat_id.check(errors),
        }
        errors.non_empty("gift_id", &self.gift_id);
        if let Some(text) = &self.text {
            errors.char_bounds("text", text, 0, 128);
        }
        errors.mutually_exclusive(
            "text_parse_mode",
            "text_entities",
            self.text_parse_mode.is_some(),
            self.text_entities.is_some(),
        );
        if let Some(entities) = &self.text_entities {
            errors.nested_each("text_entities", entities);
        }
    }
}

impl Method for SendGift {
    type Return = bool;
    const ENDPOINT: &'static str = "sendGift";
}

// ─── GetAvailableGifts ───────────────────────────────────────────────────────

/// Fetch the catalogue of gifts the bot can send. Takes no parameters and
/// goes out as a plain GET.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct GetAvailableGifts {}

impl GetAvailableGifts {
    pub fn new() -> Self {
        Self {}
    }
}

impl Validate for GetAvailableGifts {
    fn check(&self, _errors: &mut ValidationErrors) {}
}

impl Method for GetAvailableGifts {
    type Return = Gifts;
    const ENDPOINT: &'static str = "getAvailableGifts";
}
