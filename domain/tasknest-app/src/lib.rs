use std::sync::Arc;

use crate::{
    ports::email::EmailPort,
    workflow::registration::send_email::{
        SendRegistrationEmailUseCase, SendRegistrationEmailUseCaseImpl,
    },
};

pub mod domain;
pub mod ports;
pub mod workflow;

pub struct Application {
    pub send_registration_email_use_case:
        Box<dyn SendRegistrationEmailUseCase + Send + Sync + 'static>,
}

pub fn build_application<E: EmailPort + Send + Sync + 'static>(email_port: Arc<E>) -> Application {
    Application {
        send_registration_email_use_case: Box::new(SendRegistrationEmailUseCaseImpl::new(
            email_port,
        )),
    }
}
