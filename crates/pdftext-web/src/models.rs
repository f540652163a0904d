use serde::Serialize;

/// Successful extraction response.
#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub text: String,
    pub pages: usize,
}

/// Error response body. `pages` is populated when the document parsed
/// cleanly but yielded no text, so callers still learn the page count.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<usize>,
}

/// Liveness response, independent of the extraction path.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
