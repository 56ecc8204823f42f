//! Gift responses.

use serde::{Deserialize, Serialize};

use crate::stickers::Sticker;

/// One gift a bot can send.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gift {
    pub id: String,
    pub sticker: Sticker,
    /// Price in Telegram Stars.
    pub star_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_star_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_count: Option<i64>,
}

/// The catalogue returned by `getAvailableGifts`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gifts {
    pub gifts: Vec<Gift>,
}
