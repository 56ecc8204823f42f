//! # courier-client
//!
//! Async dispatcher for the Telegram Bot API.
//!
//! Each call runs the same pipeline: validate the request locally, encode it
//! as JSON or a streamed multipart form, POST it to
//! `{base_url}/bot{token}/{endpoint}`, and decode the response envelope into
//! the request's declared result type.
//!
//! ```rust,no_run
//! use courier_client::{Client, Config};
//! use courier_types::methods::stickers::SendSticker;
//! use courier_types::InputFile;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("123456:ABC-DEF")?;
//! let message = client
//!     .invoke(&SendSticker::new(123456789, InputFile::path("cat.webp")))
//!     .await?;
//! println!("sent message {}", message.message_id);
//! # Ok(()) }
//! ```
//!
//! The client holds no state beyond the credential and the connection pool;
//! it is cheap to clone and safe to share across tasks. Two bots are just
//! two `Client` values.

#![deny(unsafe_code)]

mod errors;

pub use errors::{ApiError, InvocationError, ResponseParameters};

use std::sync::Arc;
use std::time::Duration;

use courier_types::Method;
use courier_wire::Payload;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Where the official API lives; override for local Bot API servers.
pub const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// ─── Config ───────────────────────────────────────────────────────────────────

/// Connection settings for a [`Client`].
#[derive(Clone, Debug)]
pub struct Config {
    /// Bot token from @BotFather. Embedded in the request path, so it is
    /// never logged here.
    pub token: String,
    /// API origin without a trailing slash.
    pub base_url: String,
    /// Per-request deadline covering the whole call, body upload included.
    pub timeout: Duration,
}

impl Config {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token:    token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout:  DEFAULT_TIMEOUT,
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into(); self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout; self
    }
}

// ─── Client ───────────────────────────────────────────────────────────────────

/// A handle to one bot account.
///
/// Clones share the same connection pool.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    config: Config,
    http:   reqwest::Client,
}

impl Client {
    /// Connect with default settings.
    pub fn new(token: impl Into<String>) -> Result<Self, InvocationError> {
        Self::with_config(Config::new(token))
    }

    /// Connect with explicit settings.
    pub fn with_config(config: Config) -> Result<Self, InvocationError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { inner: Arc::new(ClientInner { config, http }) })
    }

    /// Validate, encode and dispatch a request, returning its typed result.
    ///
    /// Validation failures and encode failures return before any network
    /// traffic happens.
    pub async fn invoke<M: Method>(&self, request: &M) -> Result<M::Return, InvocationError> {
        request.validate()?;
        let payload = courier_wire::encode(request)?;
        debug!(
            endpoint = M::ENDPOINT,
            multipart = payload.is_multipart(),
            "dispatching request"
        );

        let config = &self.inner.config;
        let url = format!("{}/bot{}/{}", config.base_url, config.token, M::ENDPOINT);
        let builder = match payload {
            Payload::Empty => self.inner.http.get(&url),
            Payload::Json(body) => self
                .inner
                .http
                .post(&url)
                .header(CONTENT_TYPE, "application/json")
                .body(body),
            Payload::Multipart { content_type, body } => self
                .inner
                .http
                .post(&url)
                .header(CONTENT_TYPE, content_type)
                .body(reqwest::Body::wrap_stream(body)),
        };

        let response = builder.timeout(config.timeout).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(endpoint = M::ENDPOINT, status = status.as_u16(), "response received");
        decode_envelope(&bytes)
    }
}

// ─── Convenience calls ────────────────────────────────────────────────────────

use courier_types::chat::{ChatRef, Message};
use courier_types::gifts::Gifts;
use courier_types::input_file::InputFile;
use courier_types::methods::gifts::GetAvailableGifts;
use courier_types::methods::stickers::{GetStickerSet, SendSticker};
use courier_types::stickers::StickerSet;

impl Client {
    /// Send a sticker by file id, URL or upload.
    pub async fn send_sticker(
        &self,
        chat: impl Into<ChatRef>,
        sticker: InputFile,
    ) -> Result<Message, InvocationError> {
        self.invoke(&SendSticker::new(chat, sticker)).await
    }

    /// Fetch a sticker set by name.
    pub async fn get_sticker_set(&self, name: impl Into<String>) -> Result<StickerSet, InvocationError> {
        self.invoke(&GetStickerSet::new(name)).await
    }

    /// Fetch the gifts this bot can send.
    pub async fn get_available_gifts(&self) -> Result<Gifts, InvocationError> {
        self.invoke(&GetAvailableGifts::new()).await
    }
}

// ─── Response envelope ────────────────────────────────────────────────────────

/// The JSON envelope every endpoint answers with.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    ok: bool,
    result: Option<T>,
    error_code: Option<i32>,
    description: Option<String>,
    parameters: Option<ResponseParameters>,
}

fn decode_envelope<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, InvocationError> {
    let envelope: Envelope<T> =
        serde_json::from_slice(bytes).map_err(|e| InvocationError::Deserialize(e.to_string()))?;
    if envelope.ok {
        envelope
            .result
            .ok_or_else(|| InvocationError::Deserialize("ok envelope without result".to_string()))
    } else {
        Err(InvocationError::Api(ApiError {
            code: envelope.error_code.unwrap_or(0),
            description: envelope
                .description
                .unwrap_or_else(|| "no description".to_string()),
            parameters: envelope.parameters,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Envelope decoding ─────────────────────────────────────────────────────

    #[test]
    fn decodes_ok_result() {
        let body = br#"{"ok":true,"result":"https://t.me/invoice/abc"}"#;
        let link: String = decode_envelope(body).unwrap();
        assert_eq!(link, "https://t.me/invoice/abc");
    }

    #[test]
    fn decodes_ok_bool_result() {
        let body = br#"{"ok":true,"result":true}"#;
        assert!(decode_envelope::<bool>(body).unwrap());
    }

    #[test]
    fn error_envelope_becomes_api_error() {
        let body = br#"{"ok":false,"error_code":400,"description":"Bad Request: STICKERSET_INVALID"}"#;
        match decode_envelope::<bool>(body) {
            Err(InvocationError::Api(e)) => {
                assert_eq!(e.code, 400);
                assert!(e.is("Bad Request:*"));
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[test]
    fn rate_limit_carries_retry_after() {
        let body = br#"{"ok":false,"error_code":429,"description":"Too Many Requests: retry after 7","parameters":{"retry_after":7}}"#;
        let err = decode_envelope::<bool>(body).unwrap_err();
        assert_eq!(err.retry_after_seconds(), Some(7));
    }

    #[test]
    fn garbage_body_is_a_deserialize_error() {
        let err = decode_envelope::<bool>(b"<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, InvocationError::Deserialize(_)));
    }

    #[test]
    fn ok_without_result_is_rejected() {
        let err = decode_envelope::<bool>(br#"{"ok":true}"#).unwrap_err();
        assert!(matches!(err, InvocationError::Deserialize(_)));
    }
}
