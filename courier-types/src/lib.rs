//! Typed requests and responses for the Telegram Bot API.
//!
//! Every remote method is a plain struct implementing [`Method`]: the struct
//! names the endpoint, declares the response type, and knows how to validate
//! itself against the constraints the Bot API documents. Validation runs
//! locally, before any byte leaves the process.
//!
//! # Overview
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`methods`]  | One request struct per remote method, implementing [`Method`] |
//! | [`validate`] | [`ValidationErrors`] accumulator and the [`Validate`] trait |
//! | [`input_file`] | [`InputFile`] — file id, URL, or raw upload             |
//! | [`chat`]     | [`ChatRef`] plus core response objects                    |
//! | [`markup`]   | Reply markup, keyboards, parse modes, entities            |
//! | [`inline`]   | Inline query result types                                 |
//! | [`payments`] | Invoice value objects                                     |
//! | [`stickers`] | Sticker value objects and responses                       |
//! | [`gifts`]    | Gift responses                                            |
//!
//! # Example
//!
//! ```rust
//! use courier_types::methods::stickers::SendSticker;
//! use courier_types::{ChatRef, InputFile, Validate};
//!
//! let req = SendSticker::new(ChatRef::Id(123456789), InputFile::file_id("CAACAg..."));
//! assert!(req.validate().is_ok());
//! ```

#![deny(unsafe_code)]

pub mod chat;
pub mod gifts;
pub mod inline;
pub mod input_file;
pub mod markup;
pub mod methods;
pub mod payments;
pub mod stickers;
pub mod validate;

pub use chat::ChatRef;
pub use input_file::{Attachment, InputFile, UploadContent, UploadFile};
pub use markup::{ParseMode, ReplyMarkup};
pub use validate::{Validate, ValidationErrors, Violation};

use serde::Serialize;
use serde::de::DeserializeOwned;

// ─── Method ───────────────────────────────────────────────────────────────────

/// Marks a request type that can be sent to the Bot API.
///
/// `Return` is the type the server responds with inside the `result` field of
/// the response envelope. `ENDPOINT` is the method name appended to the
/// request URL (`…/bot<token>/<ENDPOINT>`).
///
/// The transport payload is derived from the `Serialize` impl (wire field
/// names are `lower_snake_case`, absent optionals are omitted) together with
/// [`Method::attachments`], which decides between a JSON body and a
/// multipart form.
pub trait Method: Serialize + Validate {
    /// The deserialized response type.
    type Return: DeserializeOwned;

    /// Remote method name, e.g. `"sendSticker"`.
    const ENDPOINT: &'static str;

    /// Raw uploads reachable from this request's fields.
    ///
    /// Empty for requests that carry no [`UploadContent`]; any non-empty
    /// result forces multipart encoding for the whole request.
    fn attachments(&self) -> Vec<Attachment<'_>> {
        Vec::new()
    }
}
