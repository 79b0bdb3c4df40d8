use axum::Json;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use client::net::contact::{ContactError, ContactForm};

use crate::relay::RelayError;
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Invalid(#[from] ContactError),
    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Invalid(_) => StatusCode::BAD_REQUEST,
            Self::Relay(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(error = %self, "contact relay failed");
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Validate and relay one URL-encoded contact submission.
pub async fn submit(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<StatusCode, ApiError> {
    let form = ContactForm::from_pairs(fields);
    form.validate()?;
    state.relay.forward(&form).await?;
    tracing::info!(extra_fields = form.extra.len(), "contact submission relayed");
    Ok(StatusCode::NO_CONTENT)
}
