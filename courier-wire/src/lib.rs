//! Transport payload encoding for Bot API requests.
//!
//! A validated request becomes one of three payload shapes:
//!
//! | Shape                  | When                                  | Content type                        |
//! |------------------------|---------------------------------------|-------------------------------------|
//! | [`Payload::Empty`]     | request serializes to an empty object | none (dispatched as GET)            |
//! | [`Payload::Json`]      | no raw uploads reachable              | `application/json`                  |
//! | [`Payload::Multipart`] | at least one raw upload               | `multipart/form-data; boundary=…`   |
//!
//! The decision is made per request, not per method: the same logical field
//! (a thumbnail, say) may hold a JSON-safe file id on one call and a raw
//! upload on the next.
//!
//! On the multipart path, scalar fields are stringified in a stable,
//! locale-independent form (booleans as `true`/`false`, integers in
//! decimal), nested value objects travel as a single JSON-encoded form
//! field, and file bytes are streamed — never fully buffered — through the
//! body. See [`multipart`] for the streaming discipline.

#![deny(unsafe_code)]

pub mod multipart;

use std::fmt;

use courier_types::Method;
use serde_json::Value;

pub use multipart::{Form, FormBody};

// ─── EncodeError ─────────────────────────────────────────────────────────────

/// A request could not be turned into a transport payload.
#[derive(Debug)]
pub enum EncodeError {
    /// Serialization of the request or a nested value object failed.
    Json(serde_json::Error),
    /// The request did not serialize to a JSON object.
    NotAnObject,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e)     => write!(f, "serialize error: {e}"),
            Self::NotAnObject => write!(f, "request did not serialize to a JSON object"),
        }
    }
}

impl std::error::Error for EncodeError {}

impl From<serde_json::Error> for EncodeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

// ─── Payload ─────────────────────────────────────────────────────────────────

/// A transport-ready request body plus its content type.
pub enum Payload {
    /// No parameters at all.
    Empty,
    /// A flat JSON document.
    Json(String),
    /// A lazily produced multipart body.
    Multipart {
        /// Full header value including the generated boundary.
        content_type: String,
        body: FormBody,
    },
}

impl Payload {
    /// The `Content-Type` header value to send, if any.
    pub fn content_type(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Json(_) => Some("application/json"),
            Self::Multipart { content_type, .. } => Some(content_type),
        }
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart { .. })
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Payload::Empty"),
            Self::Json(body) => write!(f, "Payload::Json({} bytes)", body.len()),
            Self::Multipart { content_type, .. } => {
                write!(f, "Payload::Multipart({content_type})")
            }
        }
    }
}

// ─── encode ──────────────────────────────────────────────────────────────────

/// Encode a request into its transport payload.
///
/// Must run inside a tokio runtime when the request carries uploads: the
/// multipart body is produced by a spawned writer task (see [`multipart`]).
pub fn encode<M: Method>(method: &M) -> Result<Payload, EncodeError> {
    let fields = match serde_json::to_value(method)? {
        Value::Object(map) => map,
        _ => return Err(EncodeError::NotAnObject),
    };

    let attachments = method.attachments();
    if attachments.is_empty() {
        if fields.is_empty() {
            return Ok(Payload::Empty);
        }
        return Ok(Payload::Json(serde_json::to_string(&fields)?));
    }

    let mut form = Form::new();
    for (name, value) in &fields {
        if value.is_null() {
            continue;
        }
        // A top-level file field streams as the part of the same name; its
        // attach:// placeholder string must not also go out as a text field.
        let replaced_by_part = attachments.iter().any(|a| {
            a.part == *name && matches!(value, Value::String(s) if s.starts_with("attach://"))
        });
        if replaced_by_part {
            continue;
        }
        form.text(name.clone(), form_value(value)?);
    }
    for attachment in attachments {
        form.file(attachment.part, attachment.file.clone());
    }

    let content_type = form.content_type();
    Ok(Payload::Multipart { content_type, body: form.into_body() })
}

/// Stringify one field for multipart transport: strings pass through,
/// primitives use their stable decimal/boolean form, and anything nested is
/// embedded as its JSON encoding.
fn form_value(value: &Value) -> Result<String, EncodeError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Array(_) | Value::Object(_) => Ok(serde_json::to_string(value)?),
        Value::Null => Ok(String::new()),
    }
}
