use std::cell::RefCell;

use futures::executor::block_on;

use super::*;

#[derive(Default)]
struct RecordingTransport {
    calls: RefCell<Vec<(String, Vec<(String, String)>)>>,
    fail: bool,
}

impl ContactTransport for RecordingTransport {
    async fn post_form(&self, endpoint: &str, fields: &[(String, String)]) -> Result<(), ContactError> {
        self.calls.borrow_mut().push((endpoint.to_owned(), fields.to_vec()));
        if self.fail { Err(ContactError::Transport("connection reset".into())) } else { Ok(()) }
    }
}

fn filled() -> ContactForm {
    ContactForm::from_pairs([("NAME", "Ada"), ("EMAIL", "ada@example.test"), ("MESSAGE", "Hello"), ("PHONE", "555")])
}

// =============================================================
// ContactForm
// =============================================================

#[test]
fn from_pairs_maps_required_fields_and_keeps_extras() {
    let form = filled();
    assert_eq!(form.name, "Ada");
    assert_eq!(form.email, "ada@example.test");
    assert_eq!(form.message, "Hello");
    assert_eq!(form.extra, vec![("PHONE".to_owned(), "555".to_owned())]);
}

#[test]
fn validate_reports_first_blank_field() {
    let mut form = filled();
    form.email = "   ".into();
    assert_eq!(form.validate(), Err(ContactError::MissingField(Field::Email)));

    form.name.clear();
    assert_eq!(form.validate(), Err(ContactError::MissingField(Field::Name)));
}

#[test]
fn to_pairs_puts_required_fields_first() {
    let keys = filled()
        .to_pairs()
        .into_iter()
        .map(|(k, _)| k)
        .collect::<Vec<_>>();
    assert_eq!(keys, vec!["NAME", "EMAIL", "MESSAGE", "PHONE"]);
}

#[test]
fn missing_field_error_names_the_key() {
    assert_eq!(ContactError::MissingField(Field::Message).to_string(), "required field `MESSAGE` is empty");
}

// =============================================================
// FormStatus
// =============================================================

#[test]
fn only_success_clears_itself() {
    assert_eq!(FormStatus::Sent.clear_after(), Some(STATUS_CLEAR_DELAY));
    assert_eq!(FormStatus::Failed.clear_after(), None);
    assert_eq!(FormStatus::Invalid.clear_after(), None);
}

#[test]
fn statuses_carry_display_text() {
    assert_eq!(FormStatus::Invalid.message(), "Please fill required fields");
    assert_eq!(FormStatus::Sending.color(), None);
    assert_eq!(FormStatus::Failed.color(), Some("tomato"));
}

// =============================================================
// ContactSubmitter
// =============================================================

#[test]
fn blank_required_field_never_hits_network() {
    for field in Field::REQUIRED {
        let submitter = ContactSubmitter::new("https://sheet.test", RecordingTransport::default());
        let mut form = filled();
        match field {
            Field::Name => form.name = " ".into(),
            Field::Email => form.email.clear(),
            Field::Message => form.message = "\n".into(),
        }

        let mut seen = Vec::new();
        let status = block_on(submitter.submit(&form, |s| seen.push(s)));

        assert_eq!(status, FormStatus::Invalid);
        assert!(seen.is_empty());
        assert!(submitter.transport().calls.borrow().is_empty());
    }
}

#[test]
fn valid_form_posts_once_and_succeeds() {
    let submitter = ContactSubmitter::new("https://sheet.test", RecordingTransport::default());
    let mut seen = Vec::new();
    let status = block_on(submitter.submit(&filled(), |s| seen.push(s)));

    assert_eq!(status, FormStatus::Sent);
    assert_eq!(seen, vec![FormStatus::Sending]);
    let calls = submitter.transport().calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "https://sheet.test");
    assert_eq!(calls[0].1[0], ("NAME".to_owned(), "Ada".to_owned()));
}

#[test]
fn transport_failure_is_terminal() {
    let transport = RecordingTransport { fail: true, ..Default::default() };
    let submitter = ContactSubmitter::new(DEFAULT_ENDPOINT, transport);
    let status = block_on(submitter.submit(&filled(), |_| {}));

    assert_eq!(status, FormStatus::Failed);
    assert_eq!(submitter.transport().calls.borrow().len(), 1);
}

// =============================================================
// StatusGeneration
// =============================================================

#[test]
fn delayed_clear_is_stale_after_a_newer_status() {
    let generation = StatusGeneration::default();
    let sent = generation.bump();
    assert!(generation.is_current(sent));

    // A second submission renders "Please fill required fields" before the
    // first one's clear fires.
    let invalid = generation.bump();
    assert!(!generation.is_current(sent));
    assert!(generation.is_current(invalid));
}

#[test]
fn progress_reports_invalidate_earlier_clears() {
    let generation = StatusGeneration::default();
    let first = generation.bump();
    let transport = RecordingTransport::default();
    let submitter = ContactSubmitter::new("https://example.test/exec", transport);

    let outcome = block_on(submitter.submit(&filled(), |_| {
        generation.bump();
    }));
    let last = generation.bump();

    assert_eq!(outcome, FormStatus::Sent);
    assert!(!generation.is_current(first));
    assert!(generation.is_current(last));
}
