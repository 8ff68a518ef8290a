//! State machine behind the mailing-list popup.
//!
//! Pure and platform-agnostic: the view feeds it keystrokes, submit and close
//! events, and the outcome of the network call. Validity flags are cached at
//! the last keystroke and the submit guard reads those cached values; it never
//! re-validates the live field text.

use crate::core::validate::{is_valid_email, is_valid_name};

use super::client::{SubmitOutcome, SubscribeError, SubscriptionRequest};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Complete,
}

/// Which email error text to show. Chosen on every submit attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmailErrorMessage {
    #[default]
    Empty,
    Incorrect,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriptionForm {
    pub email: String,
    pub first_name: String,
    pub email_valid: bool,
    pub first_name_valid: bool,
    pub email_error: bool,
    pub first_name_error: bool,
    pub email_error_message: EmailErrorMessage,
    pub state: SubmissionState,
    /// Liveness token. Bumped on close so late completions can be dropped.
    pub generation: u64,
}

/// Handed out when a submit attempt passes the guard; must be presented back
/// to [`SubscriptionForm::finish_submit`] with the request's result.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionTicket {
    pub generation: u64,
    pub request: SubscriptionRequest,
}

impl SubscriptionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.email_valid = is_valid_email(&self.email);
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.first_name = value.into();
        self.first_name_valid = is_valid_name(&self.first_name);
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn is_complete(&self) -> bool {
        self.state == SubmissionState::Complete
    }

    /// Evaluate error flags and, when both cached validity flags hold, move to
    /// `Submitting` and return the request to send.
    pub fn begin_submit(&mut self, list_type: &str) -> Option<SubmissionTicket> {
        self.email_error = !self.email_valid;
        self.first_name_error = !self.first_name_valid;

        if self.first_name.is_empty() {
            self.first_name_error = true;
        }
        if self.email.is_empty() {
            self.email_error = true;
        }

        self.email_error_message = if self.email.is_empty() {
            EmailErrorMessage::Empty
        } else {
            EmailErrorMessage::Incorrect
        };

        // The disabled button already blocks this; keep one request per form.
        if self.state != SubmissionState::Idle {
            return None;
        }
        if !(self.first_name_valid && self.email_valid) {
            return None;
        }

        self.state = SubmissionState::Submitting;
        Some(SubmissionTicket {
            generation: self.generation,
            request: SubscriptionRequest {
                firstname: self.first_name.clone(),
                email: self.email.clone(),
                kind: list_type.to_string(),
            },
        })
    }

    /// Apply the result of a submission. Returns `false` when the ticket
    /// belongs to a form that has been closed since, in which case nothing
    /// changes.
    pub fn finish_submit(
        &mut self,
        ticket: &SubmissionTicket,
        result: &Result<SubmitOutcome, SubscribeError>,
    ) -> bool {
        if ticket.generation != self.generation || !self.is_submitting() {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "dropping stale subscription result"
            );
            return false;
        }

        self.state = match result {
            Ok(SubmitOutcome::Accepted) => SubmissionState::Complete,
            Ok(SubmitOutcome::Rejected(_)) => SubmissionState::Idle,
            Err(err) => {
                tracing::error!(error = %err, "Subscription failed");
                SubmissionState::Idle
            }
        };
        true
    }

    /// Reset everything to the initial state. Any in-flight submission is
    /// orphaned: its ticket no longer matches.
    pub fn close(&mut self) {
        let generation = self.generation.wrapping_add(1);
        *self = Self {
            generation,
            ..Self::default()
        };
    }
}
