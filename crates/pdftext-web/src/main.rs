use std::net::SocketAddr;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

mod handlers;
mod models;
mod upload;

fn app() -> Router {
    // Allow large uploads (50MB); anything bigger belongs in a batch pipeline
    let body_limit = DefaultBodyLimit::max(50 * 1024 * 1024);

    Router::new()
        .route("/parse-pdf", post(handlers::parse::parse_pdf))
        .route("/health", get(handlers::health::health))
        .layer(body_limit)
        // Deliberately allow-everything CORS; this service has no auth and
        // is meant to sit behind whatever frontend wants to call it.
        .layer(CorsLayer::very_permissive())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let addr = SocketAddr::from(([0, 0, 0, 0], 8000));
    tracing::info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app()).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use pdftext_core::test_pdf::build_pdf;
    use tower::ServiceExt;

    const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

    fn multipart_body(filename: &str, data: &[u8]) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
                 Content-Type: application/pdf\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    async fn upload(filename: &str, data: &[u8]) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/parse-pdf")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(filename, data)))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_is_ok() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn extracts_text_and_page_count() {
        let pdf = build_pdf(&[Some("Hello from a test"), Some("Page two")]);
        let (status, body) = upload("doc.pdf", &pdf).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pages"], 2);
        let text = body["text"].as_str().unwrap();
        assert!(text.contains("Hello from a test"));
        assert!(text.contains("Page two"));
    }

    #[tokio::test]
    async fn extension_check_is_case_insensitive() {
        let pdf = build_pdf(&[Some("Shouting filename")]);
        let (status, body) = upload("REPORT.PDF", &pdf).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pages"], 1);
    }

    #[tokio::test]
    async fn rejects_wrong_extension() {
        let (status, body) = upload("notes.txt", b"whatever").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Only PDF files are supported");
    }

    #[tokio::test]
    async fn scanned_document_is_a_client_error() {
        let pdf = build_pdf(&[None, None]);
        let (status, body) = upload("scan.pdf", &pdf).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let detail = body["detail"].as_str().unwrap();
        assert!(detail.contains("scanned or image-based"));
        assert_eq!(body["pages"], 2);
    }

    #[tokio::test]
    async fn garbage_bytes_are_a_server_error() {
        let (status, body) = upload("fake.pdf", b"not a pdf at all").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let detail = body["detail"].as_str().unwrap();
        assert!(detail.starts_with("Failed to parse PDF:"));
    }

    #[tokio::test]
    async fn missing_file_field_is_a_client_error() {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"comment\"\r\n\r\n\
             hello\r\n--{BOUNDARY}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/parse-pdf")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
