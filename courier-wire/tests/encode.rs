use courier_types::chat::ChatRef;
use courier_types::input_file::InputFile;
use courier_types::methods::gifts::GetAvailableGifts;
use courier_types::methods::stickers::{CreateNewStickerSet, SendSticker};
use courier_types::stickers::{InputSticker, StickerFormat};
use courier_wire::{Payload, encode};
use serde_json::{Value, json};

// ── Transport selection ───────────────────────────────────────────────────────

#[test]
fn file_id_request_encodes_as_json() {
    let req = SendSticker::new(ChatRef::Id(42), InputFile::file_id("CAACAg"));
    let payload = encode(&req).unwrap();
    assert_eq!(payload.content_type(), Some("application/json"));
    assert!(!payload.is_multipart());
}

#[tokio::test]
async fn upload_request_encodes_as_multipart() {
    let req = SendSticker::new(ChatRef::Id(42), InputFile::upload("cat.webp", vec![1, 2, 3]));
    let payload = encode(&req).unwrap();

    let Payload::Multipart { content_type, body } = payload else {
        panic!("expected multipart payload");
    };
    let boundary = content_type
        .strip_prefix("multipart/form-data; boundary=")
        .expect("content type must carry the boundary");
    assert!(!boundary.is_empty());

    let bytes = body.collect().await.unwrap();
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.starts_with(&format!("--{boundary}\r\n")));
    assert!(text.contains("Content-Disposition: form-data; name=\"sticker\"; filename=\"cat.webp\""));
    assert!(text.ends_with(&format!("--{boundary}--\r\n")));
}

#[test]
fn parameterless_request_encodes_as_empty() {
    let payload = encode(&GetAvailableGifts::new()).unwrap();
    assert!(matches!(payload, Payload::Empty));
    assert_eq!(payload.content_type(), None);
}

// ── JSON path ─────────────────────────────────────────────────────────────────

#[test]
fn json_round_trips_field_for_field() {
    let req = SendSticker::new(ChatRef::Id(42), InputFile::file_id("CAACAg"))
        .emoji("😀")
        .disable_notification(true);

    let Payload::Json(body) = encode(&req).unwrap() else {
        panic!("expected JSON payload");
    };
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        value,
        json!({
            "chat_id": 42,
            "sticker": "CAACAg",
            "emoji": "😀",
            "disable_notification": true,
        })
    );
}

#[test]
fn unset_optionals_are_omitted_not_null() {
    let req = SendSticker::new(ChatRef::Username("@chat".into()), InputFile::url("https://e.com/s.webp"));
    let Payload::Json(body) = encode(&req).unwrap() else {
        panic!("expected JSON payload");
    };
    let value: Value = serde_json::from_str(&body).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2, "only chat_id and sticker should be present: {object:?}");
    assert!(!body.contains("null"));
}

// ── Multipart form fields ─────────────────────────────────────────────────────

#[tokio::test]
async fn scalars_are_stringified_stably() {
    let req = SendSticker::new(ChatRef::Id(987654321), InputFile::upload("cat.webp", vec![0u8; 8]))
        .disable_notification(true);

    let Payload::Multipart { body, .. } = encode(&req).unwrap() else {
        panic!("expected multipart payload");
    };
    let bytes = body.collect().await.unwrap();
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("name=\"chat_id\"\r\n\r\n987654321\r\n"));
    assert!(text.contains("name=\"disable_notification\"\r\n\r\ntrue\r\n"));
}

#[tokio::test]
async fn nested_uploads_travel_as_attach_references() {
    let sticker = InputSticker::new(
        InputFile::upload("first.webp", vec![9u8; 16]),
        StickerFormat::Static,
        vec!["😀".into()],
    );
    let req = CreateNewStickerSet::new(42, "cats_by_mybot", "Cats", vec![sticker]);

    let Payload::Multipart { body, .. } = encode(&req).unwrap() else {
        panic!("expected multipart payload");
    };
    let bytes = body.collect().await.unwrap();
    let text = String::from_utf8_lossy(&bytes);

    // The stickers list goes out as one JSON form field whose upload is an
    // attach:// reference, resolved by a file part of the same name.
    assert!(text.contains("name=\"stickers\""));
    assert!(text.contains("attach://first.webp"));
    assert!(text.contains("Content-Disposition: form-data; name=\"first.webp\"; filename=\"first.webp\""));
}

#[tokio::test]
async fn file_bytes_are_streamed_verbatim() {
    let content = b"RIFF....WEBP".to_vec();
    let req = SendSticker::new(ChatRef::Id(42), InputFile::upload("cat.webp", content.clone()));

    let Payload::Multipart { body, .. } = encode(&req).unwrap() else {
        panic!("expected multipart payload");
    };
    let bytes = body.collect().await.unwrap();
    let needle = content.as_slice();
    assert!(
        bytes.windows(needle.len()).any(|w| w == needle),
        "file bytes must appear in the body"
    );
}

#[tokio::test]
async fn disk_backed_uploads_stream_from_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.webp");
    let content = vec![7u8; 200 * 1024]; // spans multiple read chunks
    std::fs::write(&path, &content).unwrap();

    let req = SendSticker::new(ChatRef::Id(42), InputFile::path(&path));
    let Payload::Multipart { body, .. } = encode(&req).unwrap() else {
        panic!("expected multipart payload");
    };
    let bytes = body.collect().await.unwrap();
    assert!(bytes.len() > content.len());
    assert!(bytes.windows(64).any(|w| w == &content[..64]));
}

#[tokio::test]
async fn unreadable_file_surfaces_as_stream_error() {
    let req = SendSticker::new(ChatRef::Id(42), InputFile::path("/definitely/not/here.webp"));
    let Payload::Multipart { body, .. } = encode(&req).unwrap() else {
        panic!("expected multipart payload");
    };
    assert!(body.collect().await.is_err());
}
