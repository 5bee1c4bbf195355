use super::SubscriberQueryService;
use crate::{
    application::{
        dto::{CursorPage, SubscriberDto},
        error::ApplicationResult,
    },
    domain::subscriber::SubscriberId,
};

pub struct ListSubscribersQuery {
    pub limit: u32,
    pub after_id: Option<i64>,
}

const DEFAULT_LIMIT: u32 = 50;
const MAX_LIMIT: u32 = 200;

impl SubscriberQueryService {
    pub async fn list_subscribers(
        &self,
        query: ListSubscribersQuery,
    ) -> ApplicationResult<CursorPage<SubscriberDto>> {
        let limit = if query.limit == 0 {
            DEFAULT_LIMIT
        } else {
            query.limit.min(MAX_LIMIT)
        };
        let after_id = query.after_id.map(SubscriberId::new).transpose()?;

        let (records, next_id) = self.repo.list_page(limit, after_id).await?;
        let items = records.into_iter().map(Into::into).collect();
        Ok(CursorPage::new(
            items,
            next_id.map(|id| i64::from(id).to_string()),
        ))
    }
}
