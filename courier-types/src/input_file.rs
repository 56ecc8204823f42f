//! File-valued request fields.
//!
//! The Bot API accepts a file three ways: a `file_id` already known to the
//! server, an HTTP(S) URL the server fetches itself, or raw bytes uploaded
//! inside the request. Only the last forces the whole request onto the
//! multipart transport; the first two are plain JSON string fields.

use std::path::PathBuf;

use bytes::Bytes;
use serde::{Serialize, Serializer};

use crate::validate::{Validate, ValidationErrors};

// ─── InputFile ───────────────────────────────────────────────────────────────

/// A file-valued field: reference id, fetch-by-URL, or raw upload.
///
/// The active variant of every `InputFile` reachable from a request decides
/// that request's transport: any [`InputFile::Upload`] present means the
/// request is encoded as `multipart/form-data`, otherwise it stays JSON.
#[derive(Clone, Debug, PartialEq)]
pub enum InputFile {
    /// A file already stored on Telegram's servers.
    FileId(String),
    /// A publicly reachable URL for the server to download.
    Url(String),
    /// Raw content streamed inside the request body.
    Upload(UploadFile),
}

impl InputFile {
    /// Reference a file by its server-side id.
    pub fn file_id(id: impl Into<String>) -> Self {
        Self::FileId(id.into())
    }

    /// Let the server fetch the file from a URL.
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    /// Upload in-memory bytes under the given file name.
    pub fn upload(file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self::Upload(UploadFile {
            file_name: file_name.into(),
            content:   UploadContent::Bytes(content.into()),
        })
    }

    /// Upload a file from disk, streamed at encode time.
    ///
    /// The part's file name is the path's final component.
    pub fn path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());
        Self::Upload(UploadFile { file_name, content: UploadContent::Path(path) })
    }

    /// `true` for the [`InputFile::Upload`] variant.
    pub fn needs_upload(&self) -> bool {
        matches!(self, Self::Upload(_))
    }

    /// The raw upload behind this value, if any.
    pub fn as_upload(&self) -> Option<&UploadFile> {
        match self {
            Self::Upload(f) => Some(f),
            _ => None,
        }
    }
}

/// `FileId` and `Url` serialize as their string; `Upload` serializes as the
/// `attach://<file_name>` reference that pairs with the multipart file part
/// of the same name.
impl Serialize for InputFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::FileId(id) => serializer.serialize_str(id),
            Self::Url(url) => serializer.serialize_str(url),
            Self::Upload(f) => serializer.serialize_str(&format!("attach://{}", f.file_name)),
        }
    }
}

impl Validate for InputFile {
    fn check(&self, errors: &mut ValidationErrors) {
        match self {
            Self::FileId(id) => errors.non_empty("file_id", id),
            Self::Url(url) => errors.non_empty("url", url),
            Self::Upload(f) => errors.non_empty("file_name", &f.file_name),
        }
    }
}

// ─── UploadFile ──────────────────────────────────────────────────────────────

/// A named raw upload.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadFile {
    /// Name reported in the part's `Content-Disposition` header; also used
    /// to guess the part's MIME type.
    pub file_name: String,
    pub content:   UploadContent,
}

/// Where the upload's bytes come from.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadContent {
    /// Already in memory. `Bytes` clones are cheap reference bumps.
    Bytes(Bytes),
    /// Read from disk at encode time, streamed chunk by chunk.
    Path(PathBuf),
}

// ─── Attachment ──────────────────────────────────────────────────────────────

/// A raw upload discovered in a request, paired with the multipart part name
/// it must be streamed under.
///
/// Top-level file fields stream under their own wire field name; uploads
/// nested inside a JSON-encoded form field stream under their file name and
/// are referenced from the JSON as `attach://<file_name>`.
pub struct Attachment<'a> {
    pub part: String,
    pub file: &'a UploadFile,
}

impl<'a> Attachment<'a> {
    pub fn new(part: impl Into<String>, file: &'a UploadFile) -> Self {
        Self { part: part.into(), file }
    }
}

/// Collect the attachment for a top-level file field, if it is an upload.
///
/// Nested uploads (inside lists of value objects) are collected by the
/// embedding request under the file's own name instead.
pub fn field_attachment<'a>(field: &str, file: &'a InputFile) -> Option<Attachment<'a>> {
    file.as_upload().map(|f| Attachment::new(field, f))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn references_serialize_as_plain_strings() {
        let id = serde_json::to_value(InputFile::file_id("CAACAg")).unwrap();
        assert_eq!(id, serde_json::json!("CAACAg"));

        let url = serde_json::to_value(InputFile::url("https://e.com/s.webp")).unwrap();
        assert_eq!(url, serde_json::json!("https://e.com/s.webp"));
    }

    #[test]
    fn uploads_serialize_as_attach_references() {
        let upload = serde_json::to_value(InputFile::upload("cat.webp", vec![1u8, 2])).unwrap();
        assert_eq!(upload, serde_json::json!("attach://cat.webp"));
    }

    #[test]
    fn path_uploads_take_the_file_name_from_the_path() {
        let file = InputFile::path("/tmp/stickers/cat.webp");
        match &file {
            InputFile::Upload(f) => assert_eq!(f.file_name, "cat.webp"),
            other => panic!("expected upload, got {other:?}"),
        }
        assert!(file.needs_upload());
    }

    #[test]
    fn only_uploads_need_multipart() {
        assert!(!InputFile::file_id("x").needs_upload());
        assert!(!InputFile::url("https://e.com").needs_upload());
    }
}
