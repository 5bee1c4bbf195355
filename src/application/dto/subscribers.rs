use crate::domain::subscriber::Subscriber;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriberDto {
    pub id: i64,
    pub email: String,
    pub active: bool,
    pub subscribed_at: DateTime<Utc>,
}

impl From<Subscriber> for SubscriberDto {
    fn from(subscriber: Subscriber) -> Self {
        Self {
            id: subscriber.id.into(),
            email: subscriber.email.into(),
            active: subscriber.active,
            subscribed_at: subscriber.subscribed_at,
        }
    }
}
