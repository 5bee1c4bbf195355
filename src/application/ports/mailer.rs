// src/application/ports/mailer.rs
use crate::domain::subscriber::value_objects::EmailAddress;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    /// The provider accepted the request but refused the message.
    #[error("mail provider rejected the message: {0}")]
    Rejected(String),
    /// The request never made it to the provider.
    #[error("mail transport failure: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, Copy)]
pub struct OutgoingEmail<'a> {
    pub to: &'a EmailAddress,
    pub subject: &'a str,
    pub html_body: &'a str,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail<'_>) -> Result<(), MailError>;
}
