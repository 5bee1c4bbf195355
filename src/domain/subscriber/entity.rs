// src/domain/subscriber/entity.rs
use crate::domain::subscriber::value_objects::{EmailAddress, SubscriberId, UnsubscribeToken};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Subscriber {
    pub id: SubscriberId,
    pub email: EmailAddress,
    pub active: bool,
    pub unsubscribe_token: UnsubscribeToken,
    pub subscribed_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSubscriber {
    pub email: EmailAddress,
    pub unsubscribe_token: UnsubscribeToken,
    pub subscribed_at: DateTime<Utc>,
}
