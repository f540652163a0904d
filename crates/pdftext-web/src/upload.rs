use axum::extract::Multipart;

/// An uploaded PDF with its data and original filename.
pub struct UploadedPdf {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Parse a multipart form upload into the single expected PDF file.
///
/// The filename extension is checked before the field body is read, so a
/// mistyped upload is rejected without buffering or parsing its bytes.
pub async fn read_pdf_upload(mut multipart: Multipart) -> Result<UploadedPdf, String> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Failed to read form field: {e}"))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                if !filename.to_lowercase().ends_with(".pdf") {
                    return Err("Only PDF files are supported".to_string());
                }

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Failed to read file data: {e}"))?
                    .to_vec();

                return Ok(UploadedPdf { filename, data });
            }
            _ => {
                // Ignore unknown fields
                let _ = field.bytes().await;
            }
        }
    }

    Err("No file uploaded".to_string())
}
