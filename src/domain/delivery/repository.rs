use crate::domain::delivery::cursor::DeliveryLogCursor;
use crate::domain::delivery::entity::{DeliveryRecord, NewDeliveryRecord};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait DeliveryLogRepository: Send + Sync {
    async fn append(&self, record: NewDeliveryRecord) -> DomainResult<()>;
    async fn list_page(
        &self,
        limit: u32,
        cursor: Option<DeliveryLogCursor>,
    ) -> DomainResult<(Vec<DeliveryRecord>, Option<DeliveryLogCursor>)>;
}
