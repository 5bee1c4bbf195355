use super::DeliveryQueryService;
use crate::{
    application::{
        dto::{CursorPage, DeliveryRecordDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{delivery::DeliveryLogCursor, errors::DomainError},
};

pub struct ListDeliveriesQuery {
    pub limit: u32,
    pub cursor: Option<String>,
}

const DEFAULT_LIMIT: u32 = 50;
const MAX_LIMIT: u32 = 200;

impl DeliveryQueryService {
    /// Delivery audit trail, newest first.
    pub async fn list_deliveries(
        &self,
        query: ListDeliveriesQuery,
    ) -> ApplicationResult<CursorPage<DeliveryRecordDto>> {
        let limit = if query.limit == 0 {
            DEFAULT_LIMIT
        } else {
            query.limit.min(MAX_LIMIT)
        };
        let cursor = match query.cursor.as_deref() {
            Some(value) => match DeliveryLogCursor::decode(value) {
                Ok(cursor) => Some(cursor),
                Err(DomainError::Validation(msg)) => {
                    return Err(ApplicationError::validation(msg));
                }
                Err(other) => return Err(ApplicationError::from(other)),
            },
            None => None,
        };

        let (records, next_cursor) = self.repo.list_page(limit, cursor).await?;
        let items = records.into_iter().map(Into::into).collect();
        Ok(CursorPage::new(
            items,
            next_cursor.map(|cursor| cursor.encode()),
        ))
    }
}
