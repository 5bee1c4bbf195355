use super::PostQueryService;
use crate::{
    application::{
        dto::{CursorPage, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        post::{PostCategory, PostListCursor},
    },
};

pub struct ListPostsQuery {
    pub category: Option<String>,
    pub include_unpublished: bool,
    pub limit: u32,
    pub cursor: Option<String>,
}

const DEFAULT_LIMIT: u32 = 20;
const MAX_LIMIT: u32 = 100;

impl PostQueryService {
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<CursorPage<PostDto>> {
        let category = query
            .category
            .as_deref()
            .map(PostCategory::parse)
            .transpose()?;
        let limit = if query.limit == 0 {
            DEFAULT_LIMIT
        } else {
            query.limit.min(MAX_LIMIT)
        };
        let cursor = Self::decode_cursor(query.cursor.as_deref())?;

        let (records, next_cursor) = self
            .read_repo
            .list_page(query.include_unpublished, category, limit, cursor)
            .await?;

        let items = records.into_iter().map(Into::into).collect();
        Ok(CursorPage::new(
            items,
            next_cursor.map(|cursor| cursor.encode()),
        ))
    }

    fn decode_cursor(token: Option<&str>) -> ApplicationResult<Option<PostListCursor>> {
        match token {
            Some(value) => match PostListCursor::decode(value) {
                Ok(cursor) => Ok(Some(cursor)),
                Err(DomainError::Validation(msg)) => Err(ApplicationError::validation(msg)),
                Err(other) => Err(ApplicationError::from(other)),
            },
            None => Ok(None),
        }
    }
}
