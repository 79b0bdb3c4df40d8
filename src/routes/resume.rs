use axum::http::header;
use axum::response::IntoResponse;
use client::util::resume::{RESUME_FILE_NAME, RESUME_MIME, RESUME_PDF};

/// Serve the embedded résumé as an attachment, same bytes the page's
/// download button builds its blob from.
pub async fn download() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, RESUME_MIME.to_owned()),
            (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{RESUME_FILE_NAME}\"")),
        ],
        RESUME_PDF,
    )
}
