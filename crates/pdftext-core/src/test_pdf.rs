//! Programmatic minimal-PDF builder for tests.
//!
//! Assembles a well-formed PDF 1.4 document in memory with a correct xref
//! table, so tests don't need checked-in binary fixtures. Each page either
//! draws one line of Helvetica text or carries an empty content stream
//! (standing in for a scanned/image-only page).

/// Build a PDF with one entry per page: `Some(text)` draws the text,
/// `None` produces a page with no text layer.
pub fn build_pdf(pages: &[Option<&str>]) -> Vec<u8> {
    let mut out: Vec<u8> = Vec::new();
    out.extend_from_slice(b"%PDF-1.4\n");

    // Object numbering: 1 catalog, 2 page tree, 3 font, then for page i
    // (0-based) the page object is 4 + 2i and its content stream 5 + 2i.
    let num_objects = 3 + 2 * pages.len();
    let mut offsets: Vec<usize> = Vec::with_capacity(num_objects);

    let mut push_obj = |out: &mut Vec<u8>, offsets: &mut Vec<usize>, id: usize, body: &[u8]| {
        offsets.push(out.len());
        out.extend_from_slice(format!("{id} 0 obj\n").as_bytes());
        out.extend_from_slice(body);
        out.extend_from_slice(b"\nendobj\n");
    };

    push_obj(
        &mut out,
        &mut offsets,
        1,
        b"<< /Type /Catalog /Pages 2 0 R >>",
    );

    let kids: Vec<String> = (0..pages.len()).map(|i| format!("{} 0 R", 4 + 2 * i)).collect();
    push_obj(
        &mut out,
        &mut offsets,
        2,
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            pages.len()
        )
        .as_bytes(),
    );

    push_obj(
        &mut out,
        &mut offsets,
        3,
        b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
    );

    for (i, page) in pages.iter().enumerate() {
        let page_id = 4 + 2 * i;
        let content_id = 5 + 2 * i;

        push_obj(
            &mut out,
            &mut offsets,
            page_id,
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 3 0 R >> >> /Contents {content_id} 0 R >>"
            )
            .as_bytes(),
        );

        let content = match page {
            Some(text) => format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", escape(text)),
            None => String::new(),
        };
        push_obj(
            &mut out,
            &mut offsets,
            content_id,
            format!(
                "<< /Length {} >>\nstream\n{}\nendstream",
                content.len(),
                content
            )
            .as_bytes(),
        );
    }

    let xref_offset = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", num_objects + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in &offsets {
        out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            num_objects + 1
        )
        .as_bytes(),
    );

    out
}

/// Escape the characters PDF literal strings reserve.
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}
