//! Inline mode methods.

use serde::Serialize;

use crate::Method;
use crate::inline::{InlineQueryResult, InlineQueryResultsButton};
use crate::validate::{Validate, ValidationErrors};

// ─── AnswerInlineQuery ───────────────────────────────────────────────────────

/// Send the result list for an inline query.
///
/// At most 50 results per answer; use `next_offset` to paginate beyond that.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnswerInlineQuery {
    pub inline_query_id: String,
    pub results: Vec<InlineQueryResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_personal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button: Option<InlineQueryResultsButton>,
}

impl AnswerInlineQuery {
    pub fn new(inline_query_id: impl Into<String>, results: Vec<InlineQueryResult>) -> Self {
        Self {
            inline_query_id: inline_query_id.into(),
            results,
            cache_time:  None,
            is_personal: None,
            next_offset: None,
            button:      None,
        }
    }

    /// Server-side cache time for this answer, in seconds.
    pub fn cache_time(mut self, seconds: i64) -> Self {
        self.cache_time = Some(seconds); self
    }

    /// Cache per-user instead of per-query.
    pub fn is_personal(mut self, v: bool) -> Self {
        self.is_personal = Some(v); self
    }

    /// Offset the client sends back to fetch the next result page.
    /// Empty string means no more results.
    pub fn next_offset(mut self, offset: impl Into<String>) -> Self {
        self.next_offset = Some(offset.into()); self
    }

    pub fn button(mut self, button: InlineQueryResultsButton) -> Self {
        self.button = Some(button); self
    }
}

impl Validate for AnswerInlineQuery {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.non_empty("inline_query_id", &self.inline_query_id);
        errors.list_bounds("results", self.results.len(), 0, 50);
        errors.nested_each("results", &self.results);
        if let Some(cache_time) = self.cache_time {
            errors.at_least("cache_time", cache_time, 0);
        }
        if let Some(offset) = &self.next_offset {
            errors.max_bytes("next_offset", offset, 64);
        }
        if let Some(button) = &self.button {
            errors.nested("button", button);
        }
    }
}

impl Method for AnswerInlineQuery {
    type Return = bool;
    const ENDPOINT: &'static str = "answerInlineQuery";
}
