use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::ports::email::OutgoingEmail;

pub const REGISTRATION_SUBJECT: &str = "TASKNEST Seller Registration";

const UNKNOWN_FAILURE: &str = "unknown transport failure";

/// Payload of a `sendEmail` invocation.
///
/// Missing fields deserialize to empty strings so that an incomplete payload
/// still reaches the transport, which then rejects the empty recipient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationEmailRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub unique_code: String,
}

impl RegistrationEmailRequest {
    pub fn new(email: impl Into<String>, unique_code: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            unique_code: unique_code.into(),
        }
    }

    pub fn body(&self) -> String {
        format!(
            "Thank you for registering as a seller. Your unique code is: {}",
            self.unique_code
        )
    }

    pub fn to_outgoing_email(&self) -> OutgoingEmail {
        OutgoingEmail {
            to: self.email.clone(),
            subject: REGISTRATION_SUBJECT.to_string(),
            body: self.body(),
        }
    }
}

/// Outcome of a dispatch. `error` is present exactly when `success` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchResult {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl DispatchResult {
    pub fn success() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(description: impl Into<String>) -> Self {
        let description = description.into();
        let error = if description.trim().is_empty() {
            UNKNOWN_FAILURE.to_string()
        } else {
            description
        };
        Self {
            success: false,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl<E: Display> From<Result<(), E>> for DispatchResult {
    fn from(outcome: Result<(), E>) -> Self {
        match outcome {
            Ok(()) => DispatchResult::success(),
            Err(e) => DispatchResult::failure(e.to_string()),
        }
    }
}
