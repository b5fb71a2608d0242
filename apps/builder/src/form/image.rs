//! Profile picture ingestion: raw upload bytes → `data:` URI.

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Encodes an uploaded file as an inline data URI.
///
/// The declared content type wins when it is an `image/*` type; otherwise the
/// format is sniffed from the leading bytes. Returns `None` for empty or
/// non-image payloads, which callers treat as "leave the field alone".
pub fn to_data_uri(declared_type: Option<&str>, bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }
    let mime = declared_type
        .map(|t| t.trim().to_ascii_lowercase())
        .filter(|t| t.starts_with("image/"))
        .or_else(|| sniff_image_type(bytes).map(str::to_string))?;

    Some(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

/// Recognizes the image formats a browser file picker commonly hands over.
pub fn sniff_image_type(bytes: &[u8]) -> Option<&'static str> {
    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n";
    const JPEG: &[u8] = b"\xff\xd8\xff";

    if bytes.starts_with(PNG) {
        Some("image/png")
    } else if bytes.starts_with(JPEG) {
        Some("image/jpeg")
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        Some("image/gif")
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else if bytes.starts_with(b"BM") {
        Some("image/bmp")
    } else if looks_like_svg(bytes) {
        Some("image/svg+xml")
    } else {
        None
    }
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(512)];
    String::from_utf8_lossy(head).to_ascii_lowercase().contains("<svg")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";

    #[test]
    fn test_declared_image_type_is_used() {
        let uri = to_data_uri(Some("image/jpeg"), b"abc").unwrap();
        assert_eq!(uri, "data:image/jpeg;base64,YWJj");
    }

    #[test]
    fn test_sniffs_when_type_missing_or_generic() {
        let uri = to_data_uri(None, PNG_HEADER).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));

        let uri = to_data_uri(Some("application/octet-stream"), b"GIF89a....").unwrap();
        assert!(uri.starts_with("data:image/gif;base64,"));
    }

    #[test]
    fn test_rejects_non_images_and_empty_uploads() {
        assert!(to_data_uri(Some("text/plain"), b"hello world").is_none());
        assert!(to_data_uri(None, b"%PDF-1.4").is_none());
        assert!(to_data_uri(Some("image/png"), b"").is_none());
    }

    #[test]
    fn test_sniff_formats() {
        assert_eq!(sniff_image_type(b"\xff\xd8\xff\xe0"), Some("image/jpeg"));
        assert_eq!(sniff_image_type(b"RIFF\x00\x00\x00\x00WEBPVP8 "), Some("image/webp"));
        assert_eq!(sniff_image_type(b"BM\x00\x00"), Some("image/bmp"));
        assert_eq!(
            sniff_image_type(b"<?xml version=\"1.0\"?><svg xmlns=\"\"/>"),
            Some("image/svg+xml")
        );
        assert_eq!(sniff_image_type(b"plain"), None);
    }
}
