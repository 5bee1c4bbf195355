use crate::domain::delivery::DeliveryRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryRecordDto {
    pub id: i64,
    pub email: String,
    pub post_id: Option<i64>,
    pub subject: String,
    pub status: String,
    pub error_message: Option<String>,
    pub sent_at: DateTime<Utc>,
}

impl From<DeliveryRecord> for DeliveryRecordDto {
    fn from(record: DeliveryRecord) -> Self {
        Self {
            id: record.id,
            email: record.email.into(),
            post_id: record.post_id.map(Into::into),
            subject: record.subject,
            status: record.status.as_str().to_owned(),
            error_message: record.error_message,
            sent_at: record.sent_at,
        }
    }
}
