//! Mailing-list subscription popup: field validation, a single POST, and the
//! success panel.

pub mod client;
pub mod form;
mod view;

pub use client::{SubmitOutcome, SubscribeError, SubscriptionClient, SubscriptionRequest};
pub use form::{EmailErrorMessage, SubmissionState, SubmissionTicket, SubscriptionForm};
pub use view::{MailPopup, MailPopupContent};
