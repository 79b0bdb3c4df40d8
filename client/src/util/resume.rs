//! Placeholder resume document.
//!
//! A minimal one-page PDF offered from the resume button and from the
//! server's `resume.pdf` route until a real document is published.

pub const RESUME_FILE_NAME: &str = "Resume.pdf";
pub const RESUME_MIME: &str = "application/pdf";

pub const RESUME_PDF: &[u8] = b"%PDF-1.4\n\
1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n\
2 0 obj\n<< /Type /Pages /Count 1 /Kids [3 0 R] >>\nendobj\n\
3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 300 144] /Contents 4 0 R >>\nendobj\n\
4 0 obj\n<< /Length 37 >>\nstream\nBT /F1 18 Tf 30 100 Td (Resume) Tj ET\nendstream\nendobj\n\
xref\n0 5\n0000000000 65535 f \n0000000010 00000 n \n0000000061 00000 n \n0000000112 00000 n \n0000000211 00000 n \n\
trailer\n<< /Root 1 0 R >>\nstartxref\n306\n%%EOF";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_framed_as_pdf() {
        assert!(RESUME_PDF.starts_with(b"%PDF-1.4\n"));
        assert!(RESUME_PDF.ends_with(b"%%EOF"));
    }
}
