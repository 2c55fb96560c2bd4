use std::sync::Arc;

use uuid::Uuid;

use crate::{
    domain::registration::{DispatchResult, RegistrationEmailRequest},
    ports::email::EmailPort,
};

#[async_trait::async_trait]
pub trait SendRegistrationEmailUseCase {
    /// Makes exactly one send attempt. Transport failures come back as a
    /// failed `DispatchResult`, never as a panic or error.
    async fn send_registration_email(&self, request: &RegistrationEmailRequest) -> DispatchResult;
}

pub struct SendRegistrationEmailUseCaseImpl<E: EmailPort> {
    email_port: Arc<E>,
}

impl<E: EmailPort> SendRegistrationEmailUseCaseImpl<E> {
    pub fn new(email_port: Arc<E>) -> Self {
        Self { email_port }
    }
}

#[async_trait::async_trait]
impl<E: EmailPort + Send + Sync + 'static> SendRegistrationEmailUseCase
    for SendRegistrationEmailUseCaseImpl<E>
{
    async fn send_registration_email(&self, request: &RegistrationEmailRequest) -> DispatchResult {
        let invocation_id = Uuid::new_v4();
        log::info!(
            "[{}] Sending registration email to '{}'",
            invocation_id,
            request.email
        );

        let email = request.to_outgoing_email();
        let outcome = self.email_port.send_email(&email).await;
        match &outcome {
            Ok(()) => log::info!("[{}] Registration email accepted", invocation_id),
            Err(e) => log::warn!("[{}] Registration email failed: {}", invocation_id, e),
        }

        DispatchResult::from(outcome)
    }
}
