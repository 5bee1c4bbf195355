// src/infrastructure/repositories/postgres_delivery_log.rs
use super::map_sqlx;
use crate::domain::delivery::{
    DeliveryLogCursor, DeliveryLogRepository, DeliveryRecord, DeliveryStatus, NewDeliveryRecord,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::PostId;
use crate::domain::subscriber::EmailAddress;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresDeliveryLogRepository {
    pool: PgPool,
}

impl PostgresDeliveryLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DeliveryRow {
    id: i64,
    email: String,
    post_id: Option<i64>,
    subject: String,
    status: String,
    error_message: Option<String>,
    sent_at: DateTime<Utc>,
}

impl TryFrom<DeliveryRow> for DeliveryRecord {
    type Error = DomainError;

    fn try_from(row: DeliveryRow) -> Result<Self, Self::Error> {
        Ok(DeliveryRecord {
            id: row.id,
            email: EmailAddress::new(row.email)?,
            post_id: row.post_id.map(PostId::new).transpose()?,
            subject: row.subject,
            status: DeliveryStatus::parse(&row.status)?,
            error_message: row.error_message,
            sent_at: row.sent_at,
        })
    }
}

#[async_trait]
impl DeliveryLogRepository for PostgresDeliveryLogRepository {
    async fn append(&self, record: NewDeliveryRecord) -> DomainResult<()> {
        sqlx::query(
            r#"
            INSERT INTO delivery_log (email, post_id, subject, status, error_message, sent_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(record.email.as_str())
        .bind(record.post_id.map(i64::from))
        .bind(record.subject)
        .bind(record.status.as_str())
        .bind(record.error_message)
        .bind(record.sent_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }

    async fn list_page(
        &self,
        limit: u32,
        cursor: Option<DeliveryLogCursor>,
    ) -> DomainResult<(Vec<DeliveryRecord>, Option<DeliveryLogCursor>)> {
        let limit = limit.clamp(1, 200);
        let fetch_limit = i64::from(limit) + 1;

        let rows = match cursor {
            Some(cursor) => {
                sqlx::query_as::<_, DeliveryRow>(
                    "SELECT id, email, post_id, subject, status, error_message, sent_at
                     FROM delivery_log
                     WHERE (sent_at, id) < ($1, $2)
                     ORDER BY sent_at DESC, id DESC LIMIT $3",
                )
                .bind(cursor.sent_at)
                .bind(cursor.id)
                .bind(fetch_limit)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, DeliveryRow>(
                    "SELECT id, email, post_id, subject, status, error_message, sent_at
                     FROM delivery_log
                     ORDER BY sent_at DESC, id DESC LIMIT $1",
                )
                .bind(fetch_limit)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_sqlx)?;

        let mut records = rows
            .into_iter()
            .map(DeliveryRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut next_cursor = None;
        if records.len() > limit as usize {
            records.pop();
            if let Some(last) = records.last() {
                next_cursor = Some(DeliveryLogCursor::new(last.sent_at, last.id));
            }
        }

        Ok((records, next_cursor))
    }
}
