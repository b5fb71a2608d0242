use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Redirect, Response},
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::export::pdf::{export_filename, export_pdf};
use crate::form::Screen;
use crate::preview::load_snapshot;
use crate::state::AppState;

/// GET /result/pdf
///
/// Streams the stored resume as an attachment named after the person.
pub async fn handle_download_pdf(State(state): State<AppState>) -> Result<Response, AppError> {
    let Some(doc) = load_snapshot(&state.store).await else {
        return Ok(Redirect::to(Screen::Build.path()).into_response());
    };

    let pdf = export_pdf(&doc, &state.page_config)?;
    let filename = export_filename(&doc.personal_info.name);
    info!(filename = %filename, size = pdf.len(), "PDF exported");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(&filename)),
        ],
        Bytes::from(pdf),
    )
        .into_response())
}

/// `attachment` with a plain ASCII `filename` for old clients and the exact
/// name as an RFC 5987 `filename*`.
fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii() && !c.is_ascii_control() => c,
            _ => '_',
        })
        .collect();
    format!(
        "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
        percent_encode(filename)
    )
}

fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_disposition_ascii_name() {
        assert_eq!(
            content_disposition("Ada_Lovelace_Resume.pdf"),
            "attachment; filename=\"Ada_Lovelace_Resume.pdf\"; \
             filename*=UTF-8''Ada_Lovelace_Resume.pdf"
        );
    }

    #[test]
    fn test_content_disposition_keeps_later_spaces_and_unicode() {
        let value = content_disposition("Zoë_Ann Lee_Resume.pdf");
        assert!(value.contains("filename=\"Zo__Ann Lee_Resume.pdf\""));
        assert!(value.contains("filename*=UTF-8''Zo%C3%AB_Ann%20Lee_Resume.pdf"));
    }

    #[test]
    fn test_content_disposition_escapes_quotes() {
        let value = content_disposition("A\"B_Resume.pdf");
        assert!(value.starts_with("attachment; filename=\"A_B_Resume.pdf\""));
        assert!(value.ends_with("A%22B_Resume.pdf"));
    }
}
