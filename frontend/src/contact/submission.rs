//! The submit pipeline behind the contact form.
//!
//! `prepare` does everything that must happen before the network: field
//! validation and the rate-limit check. Only a prepared request is ever
//! dispatched, so an invalid form never reaches the email function and never
//! spends a rate-limit slot.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::contact::client::{DispatchReply, EmailDispatch};
use crate::contact::models::{ContactEmailRequest, ContactFormData, FORM_TYPE_CONTACT};
use crate::error::SubmitError;
use crate::rate_limiter::{Clock, RateLimiter};
use crate::sanitize::sanitize_input;
use crate::validation::validate_form_data;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    /// Moves to `Submitting`. Returns false when a submit is already in
    /// flight, in which case the caller must not send anything.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = SubmissionState::Submitting;
        true
    }

    pub fn finish(&mut self, outcome: &Result<(), SubmitError>) {
        *self = match outcome {
            Ok(()) => SubmissionState::Succeeded,
            Err(e) => SubmissionState::Failed(e.user_message()),
        };
    }
}

pub fn subject_for(data: &ContactFormData) -> String {
    format!("New contact form submission from {}", data.name.trim())
}

pub fn prepare<C: Clock>(
    data: ContactFormData,
    limiter: &mut RateLimiter<C>,
    now: DateTime<Utc>,
) -> Result<ContactEmailRequest, SubmitError> {
    let validation = validate_form_data(&data);
    if !validation.is_valid {
        return Err(SubmitError::Invalid(validation));
    }

    if !limiter.can_attempt() {
        return Err(SubmitError::RateLimited {
            retry_after_ms: limiter.time_until_reset(),
        });
    }

    let data = sanitized(data);
    Ok(ContactEmailRequest {
        subject: subject_for(&data),
        data,
        form_type: FORM_TYPE_CONTACT,
        // same shape as the browser's toISOString()
        submitted_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Scrubs the single-line fields of an already validated form. The message
/// keeps its own length limit and is only trimmed.
fn sanitized(data: ContactFormData) -> ContactFormData {
    let scrub = |value: Option<String>| {
        value
            .map(|v| sanitize_input(&v))
            .filter(|v| !v.is_empty())
    };
    ContactFormData {
        name: sanitize_input(&data.name),
        email: data.email.trim().to_string(),
        company: scrub(data.company),
        phone: scrub(data.phone),
        service: scrub(data.service),
        message: data.message.trim().to_string(),
    }
}

pub fn interpret_response(reply: DispatchReply) -> Result<(), SubmitError> {
    let body = reply.body.unwrap_or_default();
    if reply.ok && body.success == Some(true) {
        return Ok(());
    }
    log::error!(
        "Email function returned status {} with error {:?}",
        reply.status,
        body.error
    );
    Err(SubmitError::Rejected(body.error))
}

pub async fn send<D: EmailDispatch + ?Sized>(
    dispatcher: &D,
    request: &ContactEmailRequest,
) -> Result<(), SubmitError> {
    log::info!("Sending contact form for {}", request.data.email);
    let reply = dispatcher.dispatch(request).await.map_err(|e| {
        log::error!("Contact form request failed: {}", e);
        e
    })?;
    interpret_response(reply)
}

/// Validate, rate-limit, send and interpret in one go.
pub async fn submit<D: EmailDispatch + ?Sized, C: Clock>(
    dispatcher: &D,
    limiter: &mut RateLimiter<C>,
    data: ContactFormData,
    now: DateTime<Utc>,
) -> Result<(), SubmitError> {
    let request = prepare(data, limiter, now)?;
    send(dispatcher, &request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::models::ContactEmailResponse;
    use crate::rate_limiter::tests::ManualClock;
    use crate::validation::Field;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct RecordingDispatch {
        reply: Result<DispatchReply, SubmitError>,
        sent: RefCell<Vec<ContactEmailRequest>>,
    }

    impl RecordingDispatch {
        fn replying(ok: bool, status: u16, body: Option<ContactEmailResponse>) -> Self {
            Self {
                reply: Ok(DispatchReply { ok, status, body }),
                sent: RefCell::new(Vec::new()),
            }
        }

        fn failing(err: SubmitError) -> Self {
            Self {
                reply: Err(err),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl EmailDispatch for RecordingDispatch {
        async fn dispatch(
            &self,
            request: &ContactEmailRequest,
        ) -> Result<DispatchReply, SubmitError> {
            self.sent.borrow_mut().push(request.clone());
            self.reply.clone()
        }
    }

    fn success_body() -> Option<ContactEmailResponse> {
        Some(ContactEmailResponse {
            success: Some(true),
            error: None,
        })
    }

    fn jane() -> ContactFormData {
        ContactFormData {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: Some("+61412345678".to_string()),
            message: "I need help with my network setup please.".to_string(),
            ..Default::default()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 15, 9, 30, 0).unwrap()
    }

    fn limiter() -> RateLimiter<ManualClock> {
        RateLimiter::with_clock(5, 60_000, ManualClock::at(0))
    }

    #[test]
    fn valid_form_ends_in_succeeded() {
        let dispatch = RecordingDispatch::replying(true, 200, success_body());
        let mut limiter = limiter();
        let mut state = SubmissionState::Idle;

        assert!(state.begin());
        let outcome = block_on(submit(&dispatch, &mut limiter, jane(), now()));
        state.finish(&outcome);

        assert_eq!(state, SubmissionState::Succeeded);
        let sent = dispatch.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "New contact form submission from Jane Doe");
        assert_eq!(sent[0].form_type, "contact");
        assert_eq!(sent[0].submitted_at, "2026-10-15T09:30:00.000Z");
    }

    #[test]
    fn invalid_phone_never_reaches_the_network() {
        let dispatch = RecordingDispatch::replying(true, 200, success_body());
        let mut limiter = limiter();
        let mut data = jane();
        data.phone = Some("12345".to_string());

        let outcome = block_on(submit(&dispatch, &mut limiter, data, now()));

        match outcome {
            Err(SubmitError::Invalid(result)) => {
                assert!(!result.is_valid);
                assert!(result.error(Field::Phone).is_some());
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
        assert!(dispatch.sent.borrow().is_empty());
        assert_eq!(limiter.attempts(), 0);
    }

    #[test]
    fn rate_limit_blocks_before_dispatch() {
        let dispatch = RecordingDispatch::replying(true, 200, success_body());
        let mut limiter = RateLimiter::with_clock(1, 60_000, ManualClock::at(0));

        assert!(block_on(submit(&dispatch, &mut limiter, jane(), now())).is_ok());
        let second = block_on(submit(&dispatch, &mut limiter, jane(), now()));

        assert_eq!(
            second,
            Err(SubmitError::RateLimited {
                retry_after_ms: 60_000
            })
        );
        assert_eq!(dispatch.sent.borrow().len(), 1);
    }

    #[test]
    fn collaborator_error_is_surfaced() {
        let dispatch = RecordingDispatch::replying(
            false,
            500,
            Some(ContactEmailResponse {
                success: None,
                error: Some("Email service unavailable".to_string()),
            }),
        );
        let mut state = SubmissionState::default();
        state.begin();

        let outcome = block_on(submit(&dispatch, &mut limiter(), jane(), now()));
        state.finish(&outcome);

        assert_eq!(
            state,
            SubmissionState::Failed("Email service unavailable".to_string())
        );
    }

    #[test]
    fn ok_status_without_success_flag_fails_generically() {
        let reply = DispatchReply {
            ok: true,
            status: 200,
            body: Some(ContactEmailResponse::default()),
        };
        assert_eq!(interpret_response(reply), Err(SubmitError::Rejected(None)));

        let unreadable = DispatchReply {
            ok: false,
            status: 502,
            body: None,
        };
        let err = interpret_response(unreadable).unwrap_err();
        assert_eq!(err.user_message(), crate::error::GENERIC_SUBMIT_FAILURE);
    }

    #[test]
    fn network_failure_ends_in_failed() {
        let dispatch = RecordingDispatch::failing(SubmitError::Request("offline".to_string()));
        let mut state = SubmissionState::Idle;
        state.begin();

        let outcome = block_on(submit(&dispatch, &mut limiter(), jane(), now()));
        state.finish(&outcome);

        assert!(matches!(state, SubmissionState::Failed(_)));
    }

    #[test]
    fn prepared_request_is_trimmed_after_validation() {
        let mut data = jane();
        data.name = "  Jane Doe  ".to_string();
        data.company = Some("   ".to_string());
        data.message = "  I need help with my network setup please.  ".to_string();

        let request = prepare(data, &mut limiter(), now()).unwrap();

        assert_eq!(request.data.name, "Jane Doe");
        assert_eq!(request.data.company, None);
        assert_eq!(request.data.message, "I need help with my network setup please.");
        assert_eq!(request.subject, "New contact form submission from Jane Doe");
    }

    #[test]
    fn bracketed_input_is_rejected_rather_than_scrubbed() {
        let mut data = jane();
        data.name = "<Jane Doe>".to_string();
        data.phone = Some("+61<412345678>".to_string());

        match prepare(data, &mut limiter(), now()) {
            Err(SubmitError::Invalid(result)) => {
                assert!(result.error(Field::Name).is_some());
                assert!(result.error(Field::Phone).is_some());
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn second_begin_while_submitting_is_refused() {
        let mut state = SubmissionState::Idle;
        assert!(state.begin());
        assert!(!state.begin());

        state.finish(&Ok(()));
        assert!(state.begin());
    }
}
