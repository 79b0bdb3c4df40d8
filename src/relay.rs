//! Same-origin relay for contact submissions.
//!
//! DESIGN
//! ======
//! Browsers can post straight to the spreadsheet script, but a deployment
//! may point the form at `/api/contact` instead to keep the endpoint out of
//! the page and avoid cross-origin quirks. The relay mirrors the browser's
//! rules: one attempt, and any completed response counts as delivered.

use std::time::Duration;

use client::net::contact::ContactForm;

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("relay client setup failed: {0}")]
    Client(#[source] reqwest::Error),
    #[error("contact endpoint unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct ContactRelay {
    http: reqwest::Client,
    endpoint: String,
}

impl ContactRelay {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RelayError::Client)?;
        Ok(Self { http, endpoint: endpoint.into() })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post `form` URL-encoded. The response body is not inspected.
    pub async fn forward(&self, form: &ContactForm) -> Result<(), RelayError> {
        let response = self
            .http
            .post(&self.endpoint)
            .form(&form.to_pairs())
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            tracing::debug!(%status, "contact relayed");
        } else {
            tracing::warn!(%status, "contact endpoint answered with non-success status");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "relay_test.rs"]
mod tests;
