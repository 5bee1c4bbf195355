// tests/support/mocks/delivery.rs
use async_trait::async_trait;
use newsdesk_core::domain::delivery::{
    DeliveryLogCursor, DeliveryLogRepository, DeliveryRecord, NewDeliveryRecord,
};
use newsdesk_core::domain::errors::DomainResult;
use std::sync::Mutex;

/// Captures appended delivery records for later assertions.
#[derive(Default)]
pub struct CapturingDeliveryRepo {
    pub records: Mutex<Vec<NewDeliveryRecord>>,
}

impl CapturingDeliveryRepo {
    pub fn appended(&self) -> Vec<NewDeliveryRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeliveryLogRepository for CapturingDeliveryRepo {
    async fn append(&self, record: NewDeliveryRecord) -> DomainResult<()> {
        self.records.lock().unwrap().push(record);
        Ok(())
    }

    async fn list_page(
        &self,
        _limit: u32,
        _cursor: Option<DeliveryLogCursor>,
    ) -> DomainResult<(Vec<DeliveryRecord>, Option<DeliveryLogCursor>)> {
        Ok((vec![], None))
    }
}
