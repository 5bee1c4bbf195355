// tests/support/mocks/subscriber_repo.rs
use async_trait::async_trait;
use newsdesk_core::domain::errors::{DomainError, DomainResult};
use newsdesk_core::domain::subscriber::{
    EmailAddress, NewSubscriber, Subscriber, SubscriberId, SubscriberRepository, UnsubscribeToken,
};
use std::sync::Mutex;

pub fn sample_subscriber(id: i64, email: &str, active: bool) -> Subscriber {
    Subscriber {
        id: SubscriberId::new(id).unwrap(),
        email: EmailAddress::new(email).unwrap(),
        active,
        unsubscribe_token: UnsubscribeToken::new(format!("token-{id}")).unwrap(),
        subscribed_at: super::time::fixed_now(),
    }
}

/// In-memory subscriber store.
#[derive(Default)]
pub struct InMemorySubscriberRepo {
    inner: Mutex<Vec<Subscriber>>,
}

impl InMemorySubscriberRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subscribers(subscribers: impl IntoIterator<Item = Subscriber>) -> Self {
        Self {
            inner: Mutex::new(subscribers.into_iter().collect()),
        }
    }

    pub fn get_by_email(&self, email: &str) -> Option<Subscriber> {
        self.inner
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.email.as_str() == email)
            .cloned()
    }
}

#[async_trait]
impl SubscriberRepository for InMemorySubscriberRepo {
    async fn insert(&self, subscriber: NewSubscriber) -> DomainResult<Subscriber> {
        let mut list = self.inner.lock().unwrap();
        if list.iter().any(|s| s.email == subscriber.email) {
            return Err(DomainError::Conflict("email already subscribed".into()));
        }

        let next_id = list.iter().map(|s| i64::from(s.id)).max().unwrap_or(0) + 1;
        let stored = Subscriber {
            id: SubscriberId::new(next_id)?,
            email: subscriber.email,
            active: true,
            unsubscribe_token: subscriber.unsubscribe_token,
            subscribed_at: subscriber.subscribed_at,
        };
        list.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<Subscriber>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .find(|s| &s.email == email)
            .cloned())
    }

    async fn find_by_token(&self, token: &UnsubscribeToken) -> DomainResult<Option<Subscriber>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .find(|s| &s.unsubscribe_token == token)
            .cloned())
    }

    async fn list_active(&self) -> DomainResult<Vec<Subscriber>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.active)
            .cloned()
            .collect())
    }

    async fn set_active(&self, id: SubscriberId, active: bool) -> DomainResult<Subscriber> {
        let mut list = self.inner.lock().unwrap();
        let subscriber = list
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| DomainError::NotFound("subscriber not found".into()))?;
        subscriber.active = active;
        Ok(subscriber.clone())
    }

    async fn list_page(
        &self,
        limit: u32,
        after_id: Option<SubscriberId>,
    ) -> DomainResult<(Vec<Subscriber>, Option<SubscriberId>)> {
        let floor = after_id.map(i64::from).unwrap_or(0);
        let mut subscribers: Vec<Subscriber> = self
            .inner
            .lock()
            .unwrap()
            .iter()
            .filter(|s| i64::from(s.id) > floor)
            .cloned()
            .collect();
        subscribers.sort_by_key(|s| i64::from(s.id));
        let has_more = subscribers.len() > limit as usize;
        subscribers.truncate(limit as usize);
        let next_id = if has_more {
            subscribers.last().map(|s| s.id)
        } else {
            None
        };
        Ok((subscribers, next_id))
    }
}
