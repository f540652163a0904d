use axum::Json;
use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use pdftext_core::ExtractError;

use crate::models::{ErrorBody, ParseResponse};
use crate::upload;

pub async fn parse_pdf(multipart: Multipart) -> Response {
    let upload = match upload::read_pdf_upload(multipart).await {
        Ok(upload) => upload,
        Err(detail) => return error_response(StatusCode::BAD_REQUEST, detail, None),
    };

    tracing::info!(
        filename = %upload.filename,
        bytes = upload.data.len(),
        "extracting text from upload"
    );

    // Extraction is pure blocking computation; keep it off the async workers.
    let result = tokio::task::spawn_blocking(move || pdftext_core::extract(&upload.data)).await;

    match result {
        Ok(Ok(extracted)) => Json(ParseResponse {
            text: extracted.text,
            pages: extracted.pages,
        })
        .into_response(),
        Ok(Err(ExtractError::NoText { pages })) => error_response(
            StatusCode::BAD_REQUEST,
            "Could not extract text. The PDF may be scanned or image-based.".to_string(),
            Some(pages),
        ),
        Ok(Err(ExtractError::Parse(e))) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to parse PDF: {e}"),
            None,
        ),
        Err(e) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to parse PDF: {e}"),
            None,
        ),
    }
}

fn error_response(status: StatusCode, detail: String, pages: Option<usize>) -> Response {
    if status.is_server_error() {
        tracing::warn!(%detail, "extraction failed");
    }
    (status, Json(ErrorBody { detail, pages })).into_response()
}
