use std::{fmt::Display, str::FromStr};

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use tasknest_app::ports::email::{EmailPort, OutgoingEmail, SendEmailError};

mod config;

pub use config::{ConfigError, LettreEmailConfig, service_host};

pub struct LettreEmailAdapter<T = AsyncSmtpTransport<Tokio1Executor>> {
    transport: T,
    from: Mailbox,
}

impl LettreEmailAdapter {
    pub fn from_config(config: &LettreEmailConfig) -> Result<Self, ConfigError> {
        let from = Mailbox::from_str(&config.sender)
            .map_err(|e| ConfigError::InvalidSender(e.to_string()))?;
        let host = config.smtp_host()?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&host)
            .map_err(|e| ConfigError::Transport(e.to_string()))?
            .credentials(Credentials::new(
                config.user().to_string(),
                config.credential.clone(),
            ));
        if let Some(port) = config.port {
            builder = builder.port(port);
        }

        log::info!("Using SMTP relay {} as {}", host, from);
        Ok(Self::new(builder.build(), from))
    }
}

impl<T> LettreEmailAdapter<T> {
    pub fn new(transport: T, from: Mailbox) -> Self {
        Self { transport, from }
    }

    fn build_message(&self, email: &OutgoingEmail) -> Result<Message, SendEmailError> {
        let to = Mailbox::from_str(&email.to)
            .map_err(|e| SendEmailError::InvalidRecipient(e.to_string()))?;
        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(email.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(email.body.clone())
            .map_err(|e| SendEmailError::BuildFailed(e.to_string()))
    }
}

#[async_trait::async_trait]
impl<T> EmailPort for LettreEmailAdapter<T>
where
    T: AsyncTransport + Send + Sync,
    T::Error: Display,
{
    async fn send_email(&self, email: &OutgoingEmail) -> Result<(), SendEmailError> {
        let message = self.build_message(email)?;
        self.transport
            .send(message)
            .await
            .map_err(|e| SendEmailError::TransportFailed(e.to_string()))?;
        Ok(())
    }
}
