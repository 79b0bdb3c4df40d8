//! Contact form validation and submission.
//!
//! A submission needs non-blank `NAME`, `EMAIL` and `MESSAGE` fields. Invalid
//! forms never reach the network. Valid ones are posted once as URL-encoded
//! fields; success means the request completed without a transport error,
//! and the response body is not inspected.
//!
//! ERROR HANDLING
//! ==============
//! Failures end the submission and surface as a [`FormStatus`]. There is no
//! automatic retry; the visitor resubmits by hand.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::cell::Cell;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Spreadsheet script that collects submissions.
pub const DEFAULT_ENDPOINT: &str =
    "https://script.google.com/macros/s/AKfycbzu68qQSbqYm9lDiP_1opduyRAkyUtJtPg0lXpKaZFTsdOvFAyW9SPq0omTNPlEFQBqFQ/exec";

/// How long the success message stays before it is cleared.
pub const STATUS_CLEAR_DELAY: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const REQUIRED: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Form field name as posted.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "NAME",
            Self::Email => "EMAIL",
            Self::Message => "MESSAGE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("required field `{}` is empty", .0.key())]
    MissingField(Field),
    #[error("contact transport failed: {0}")]
    Transport(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Any other named fields, forwarded unchanged.
    #[serde(default)]
    pub extra: Vec<(String, String)>,
}

impl ContactForm {
    /// Build a form from raw `(name, value)` pairs as read from the page or
    /// a request body. Later duplicates of a required field win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            let key = key.into();
            let value = value.into();
            match key.as_str() {
                "NAME" => form.name = value,
                "EMAIL" => form.email = value,
                "MESSAGE" => form.message = value,
                _ => form.extra.push((key, value)),
            }
        }
        form
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// # Errors
    ///
    /// Returns [`ContactError::MissingField`] for the first required field
    /// that is blank after trimming.
    pub fn validate(&self) -> Result<(), ContactError> {
        match Field::REQUIRED.into_iter().find(|f| self.field(*f).trim().is_empty()) {
            Some(field) => Err(ContactError::MissingField(field)),
            None => Ok(()),
        }
    }

    /// Fields in posting order: the required three, then the extras.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Field::REQUIRED
            .into_iter()
            .map(|f| (f.key().to_owned(), self.field(f).to_owned()))
            .collect::<Vec<_>>();
        pairs.extend(self.extra.iter().cloned());
        pairs
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Invalid,
    Sending,
    Sent,
    Failed,
}

impl FormStatus {
    pub fn message(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Invalid => "Please fill required fields",
            Self::Sending => "Sending...",
            Self::Sent => "Thanks! Form submitted.",
            Self::Failed => "Error sending message. Try again later.",
        }
    }

    /// Status text color, when the status sets one.
    pub fn color(self) -> Option<&'static str> {
        match self {
            Self::Invalid => Some("var(--accent)"),
            Self::Sent => Some("var(--success)"),
            Self::Failed => Some("tomato"),
            Self::Idle | Self::Sending => None,
        }
    }

    pub fn clear_after(self) -> Option<Duration> {
        matches!(self, Self::Sent).then_some(STATUS_CLEAR_DELAY)
    }
}

/// Sends URL-encoded form fields to an endpoint.
pub trait ContactTransport {
    async fn post_form(&self, endpoint: &str, fields: &[(String, String)]) -> Result<(), ContactError>;
}

/// Counts status renders so a delayed clear can tell whether a newer status
/// replaced the one it was scheduled for.
#[derive(Debug, Default)]
pub struct StatusGeneration {
    current: Cell<u64>,
}

impl StatusGeneration {
    /// Record a new render and return its generation.
    pub fn bump(&self) -> u64 {
        let next = self.current.get().wrapping_add(1);
        self.current.set(next);
        next
    }

    /// Whether `generation` is still the latest render.
    pub fn is_current(&self, generation: u64) -> bool {
        self.current.get() == generation
    }
}

pub struct ContactSubmitter<T> {
    endpoint: String,
    transport: T,
}

impl<T: ContactTransport> ContactSubmitter<T> {
    pub fn new(endpoint: impl Into<String>, transport: T) -> Self {
        Self { endpoint: endpoint.into(), transport }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validate and post `form` once.
    ///
    /// `report` sees every intermediate status (currently only `Sending`);
    /// the final status is returned.
    pub async fn submit(&self, form: &ContactForm, mut report: impl FnMut(FormStatus)) -> FormStatus {
        if let Err(e) = form.validate() {
            log::debug!("contact form rejected: {e}");
            return FormStatus::Invalid;
        }

        report(FormStatus::Sending);
        match self.transport.post_form(&self.endpoint, &form.to_pairs()).await {
            Ok(()) => FormStatus::Sent,
            Err(e) => {
                log::error!("contact submission failed: {e}");
                FormStatus::Failed
            }
        }
    }
}
