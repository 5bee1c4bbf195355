use crate::domain::errors::DomainResult;
use crate::domain::subscriber::entity::{NewSubscriber, Subscriber};
use crate::domain::subscriber::value_objects::{EmailAddress, SubscriberId, UnsubscribeToken};
use async_trait::async_trait;

#[async_trait]
pub trait SubscriberRepository: Send + Sync {
    async fn insert(&self, subscriber: NewSubscriber) -> DomainResult<Subscriber>;
    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<Subscriber>>;
    async fn find_by_token(&self, token: &UnsubscribeToken) -> DomainResult<Option<Subscriber>>;
    /// Dispatch reads only the currently active recipients.
    async fn list_active(&self) -> DomainResult<Vec<Subscriber>>;
    async fn set_active(&self, id: SubscriberId, active: bool) -> DomainResult<Subscriber>;
    async fn list_page(
        &self,
        limit: u32,
        offset_id: Option<SubscriberId>,
    ) -> DomainResult<(Vec<Subscriber>, Option<SubscriberId>)>;
}
