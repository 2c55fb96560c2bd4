use std::sync::{Arc, Mutex};

/// A fully formatted message, minus the sender which belongs to the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendEmailError {
    #[error("Invalid from address: {0}")]
    InvalidSender(String),

    #[error("Invalid to address: {0}")]
    InvalidRecipient(String),

    #[error("Failed to build email: {0}")]
    BuildFailed(String),

    #[error("Failed to send email: {0}")]
    TransportFailed(String),
}

#[async_trait::async_trait]
pub trait EmailPort {
    async fn send_email(&self, email: &OutgoingEmail) -> Result<(), SendEmailError>;
}

/// Records every send attempt, failing each one when `failure` is set.
#[derive(Clone, Default)]
pub struct MockEmailPort {
    pub sent_emails: Arc<Mutex<Vec<OutgoingEmail>>>,
    pub failure: Option<SendEmailError>,
}

#[allow(unused)]
impl MockEmailPort {
    pub fn failing(failure: SendEmailError) -> Self {
        Self {
            sent_emails: Arc::default(),
            failure: Some(failure),
        }
    }

    pub fn get_sent_emails(&self) -> Vec<OutgoingEmail> {
        self.sent_emails.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl EmailPort for MockEmailPort {
    async fn send_email(&self, email: &OutgoingEmail) -> Result<(), SendEmailError> {
        self.sent_emails.lock().unwrap().push(email.clone());
        match &self.failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(()),
        }
    }
}
