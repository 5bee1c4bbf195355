use crate::domain::errors::{DomainError, DomainResult};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};

/// Opaque keyset cursor over `(sent_at, id)` for delivery-log listings.
#[derive(Debug, Clone)]
pub struct DeliveryLogCursor {
    pub sent_at: DateTime<Utc>,
    pub id: i64,
}

impl DeliveryLogCursor {
    pub fn new(sent_at: DateTime<Utc>, id: i64) -> Self {
        Self { sent_at, id }
    }

    pub fn encode(&self) -> String {
        let raw = format!("{}|{}", self.sent_at.to_rfc3339(), self.id);
        URL_SAFE_NO_PAD.encode(raw.as_bytes())
    }

    pub fn decode(token: &str) -> DomainResult<Self> {
        let invalid = || DomainError::Validation("invalid cursor token".into());
        let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|_| invalid())?;
        let raw = String::from_utf8(bytes).map_err(|_| invalid())?;
        let mut parts = raw.splitn(2, '|');
        let sent_at_s = parts.next().ok_or_else(invalid)?;
        let id_s = parts.next().ok_or_else(invalid)?;
        let sent_at = DateTime::parse_from_rfc3339(sent_at_s)
            .map_err(|_| invalid())?
            .with_timezone(&Utc);
        let id = id_s.parse::<i64>().map_err(|_| invalid())?;
        Ok(Self::new(sent_at, id))
    }
}
