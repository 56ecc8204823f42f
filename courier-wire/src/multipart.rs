//! Streamed `multipart/form-data` construction.
//!
//! The body is produced incrementally by a writer task feeding a bounded
//! channel, and consumed as a [`futures::Stream`] of byte chunks — large
//! file uploads flow through without ever being buffered whole. Error
//! propagation is strict in both directions:
//!
//! * a file that fails to open or read surfaces as a terminal `Err` item on
//!   the stream, which the HTTP layer turns into a request failure;
//! * a dropped consumer (cancelled request) makes the writer's next send
//!   fail, stopping it and closing any open file handle.

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use courier_types::{UploadContent, UploadFile};
use futures::Stream;
use tokio::io::AsyncReadExt;
use tokio::sync::mpsc;

/// Read size for disk-backed parts.
const FILE_CHUNK_SIZE: usize = 64 * 1024;

/// Queue depth between the writer task and the HTTP consumer.
const CHANNEL_CAPACITY: usize = 8;

// ─── Form ────────────────────────────────────────────────────────────────────

/// An under-construction multipart form.
///
/// The boundary is drawn from the OS RNG at construction, so the full
/// content type is known before a single body byte is produced.
pub struct Form {
    boundary: String,
    fields:   Vec<(String, String)>,
    files:    Vec<(String, UploadFile)>,
}

impl Form {
    pub fn new() -> Self {
        Self { boundary: boundary(), fields: Vec::new(), files: Vec::new() }
    }

    /// Append a text field.
    pub fn text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Append a file part streamed under `name`.
    pub fn file(&mut self, name: impl Into<String>, file: UploadFile) {
        self.files.push((name.into(), file));
    }

    /// The `Content-Type` header value, boundary included.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Start the writer task and hand back the readable body.
    ///
    /// Must be called inside a tokio runtime.
    pub fn into_body(self) -> FormBody {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        tokio::spawn(write_body(tx, self.boundary, self.fields, self.files));
        FormBody { rx }
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

// ─── FormBody ────────────────────────────────────────────────────────────────

/// The readable side of a streaming multipart body.
///
/// Yields chunks in order; an `Err` item is terminal. Dropping the body
/// stops the writer task at its next send.
pub struct FormBody {
    rx: mpsc::Receiver<io::Result<Bytes>>,
}

impl Stream for FormBody {
    type Item = io::Result<Bytes>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().rx.poll_recv(cx)
    }
}

impl FormBody {
    /// Drain the whole body into memory. Test and debugging helper; real
    /// consumers poll the stream chunk by chunk.
    pub async fn collect(mut self) -> io::Result<Vec<u8>> {
        let mut out = Vec::new();
        while let Some(chunk) = self.rx.recv().await {
            out.extend_from_slice(&chunk?);
        }
        Ok(out)
    }
}

// ─── Writer task ─────────────────────────────────────────────────────────────

async fn write_body(
    tx: mpsc::Sender<io::Result<Bytes>>,
    boundary: String,
    fields: Vec<(String, String)>,
    files: Vec<(String, UploadFile)>,
) {
    if let Err(e) = try_write_body(&tx, &boundary, fields, files).await {
        // Surface the failure to the reader. If the reader itself is gone
        // this send fails too, and there is nobody left to tell.
        let _ = tx.send(Err(e)).await;
    }
}

async fn try_write_body(
    tx: &mpsc::Sender<io::Result<Bytes>>,
    boundary: &str,
    fields: Vec<(String, String)>,
    files: Vec<(String, UploadFile)>,
) -> io::Result<()> {
    for (name, value) in fields {
        let field = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{value}\r\n",
            escape_header_value(&name),
        );
        send(tx, Bytes::from(field)).await?;
    }

    for (name, file) in files {
        let mime = mime_guess::from_path(&file.file_name).first_or_octet_stream();
        let head = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {mime}\r\n\r\n",
            escape_header_value(&name),
            escape_header_value(&file.file_name),
        );
        send(tx, Bytes::from(head)).await?;

        match file.content {
            UploadContent::Bytes(bytes) => send(tx, bytes).await?,
            UploadContent::Path(path) => {
                let mut file = tokio::fs::File::open(&path).await?;
                let mut buf = vec![0u8; FILE_CHUNK_SIZE];
                loop {
                    let n = file.read(&mut buf).await?;
                    if n == 0 {
                        break;
                    }
                    send(tx, Bytes::copy_from_slice(&buf[..n])).await?;
                }
            }
        }
        send(tx, Bytes::from_static(b"\r\n")).await?;
    }

    send(tx, Bytes::from(format!("--{boundary}--\r\n"))).await
}

async fn send(tx: &mpsc::Sender<io::Result<Bytes>>, chunk: Bytes) -> io::Result<()> {
    tx.send(Ok(chunk))
        .await
        .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "multipart body reader dropped"))
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// 32 hex chars from the OS RNG.
fn boundary() -> String {
    let mut raw = [0u8; 16];
    getrandom::getrandom(&mut raw).expect("getrandom");
    let mut out = String::with_capacity(32);
    for byte in raw {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

/// Part names and file names land inside a quoted header parameter; quotes
/// and line breaks must not break out of it.
fn escape_header_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != '\r' && *c != '\n')
        .map(|c| if c == '"' { '\'' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_32_hex_chars_and_unique() {
        let a = boundary();
        let b = boundary();
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn header_values_cannot_break_out() {
        assert_eq!(escape_header_value("plain.png"), "plain.png");
        assert_eq!(escape_header_value("a\"b\r\nc"), "a'bc");
    }
}
