// src/domain/delivery/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::value_objects::PostId;
use crate::domain::subscriber::value_objects::EmailAddress;
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Sent,
    Failed,
}

impl DeliveryStatus {
    pub fn parse(value: &str) -> DomainResult<Self> {
        match value {
            "sent" => Ok(Self::Sent),
            "failed" => Ok(Self::Failed),
            other => Err(DomainError::Validation(format!(
                "unknown delivery status: {other}"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row per recipient per dispatch run, success or failure.
#[derive(Debug, Clone)]
pub struct DeliveryRecord {
    pub id: i64,
    pub email: EmailAddress,
    pub post_id: Option<PostId>,
    pub subject: String,
    pub status: DeliveryStatus,
    pub error_message: Option<String>,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewDeliveryRecord {
    pub email: EmailAddress,
    pub post_id: Option<PostId>,
    pub subject: String,
    pub status: DeliveryStatus,
    pub error_message: Option<String>,
    pub sent_at: DateTime<Utc>,
}
