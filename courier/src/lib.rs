//! # courier — Telegram Bot API bindings
//!
//! `courier` is a modular Rust binding for the Telegram Bot API.
//! It consists of three focused sub-crates wired together here for
//! convenience:
//!
//! | Sub-crate        | Role                                                |
//! |------------------|-----------------------------------------------------|
//! | `courier-types`  | Request structs, value objects, validation rules    |
//! | `courier-wire`   | JSON / streamed-multipart payload encoding          |
//! | `courier-client` | HTTP dispatch and response envelope decoding        |
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use courier::{Client, InputFile};
//! use courier::types::methods::stickers::SendSticker;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("123456:ABC-DEF")?;
//!
//! // File id → plain JSON body; raw upload → streamed multipart form.
//! let req = SendSticker::new(123456789, InputFile::path("cat.webp"))
//!     .disable_notification(true);
//! let message = client.invoke(&req).await?;
//! # Ok(()) }
//! ```
//!
//! Every request validates itself before dispatch; a request that breaks a
//! documented constraint never reaches the network, and the returned
//! [`ValidationErrors`] lists every violation at once.

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Re-export of [`courier_types`] — request structs, value objects, validation.
pub use courier_types as types;

/// Re-export of [`courier_wire`] — payload encoding.
pub use courier_wire as wire;

/// Re-export of [`courier_client`] — the HTTP dispatcher.
pub use courier_client as client;

// ─── Convenience re-exports ───────────────────────────────────────────────────

pub use courier_types::{
    ChatRef,
    InputFile,
    Method,
    ParseMode,
    ReplyMarkup,
    Validate,
    ValidationErrors,
};

pub use courier_wire::Payload;

pub use courier_client::{ApiError, Client, Config, InvocationError};
