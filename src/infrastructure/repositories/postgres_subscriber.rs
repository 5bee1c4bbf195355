// src/infrastructure/repositories/postgres_subscriber.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::subscriber::{
    EmailAddress, NewSubscriber, Subscriber, SubscriberId, SubscriberRepository, UnsubscribeToken,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresSubscriberRepository {
    pool: PgPool,
}

impl PostgresSubscriberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SubscriberRow {
    id: i64,
    email: String,
    active: bool,
    unsubscribe_token: String,
    subscribed_at: DateTime<Utc>,
}

impl TryFrom<SubscriberRow> for Subscriber {
    type Error = DomainError;

    fn try_from(row: SubscriberRow) -> Result<Self, Self::Error> {
        Ok(Subscriber {
            id: SubscriberId::new(row.id)?,
            email: EmailAddress::new(row.email)?,
            active: row.active,
            unsubscribe_token: UnsubscribeToken::new(row.unsubscribe_token)?,
            subscribed_at: row.subscribed_at,
        })
    }
}

#[async_trait]
impl SubscriberRepository for PostgresSubscriberRepository {
    async fn insert(&self, subscriber: NewSubscriber) -> DomainResult<Subscriber> {
        let NewSubscriber {
            email,
            unsubscribe_token,
            subscribed_at,
        } = subscriber;

        let row = sqlx::query_as::<_, SubscriberRow>(
            "INSERT INTO subscribers (email, active, unsubscribe_token, subscribed_at)
             VALUES ($1, TRUE, $2, $3)
             RETURNING id, email, active, unsubscribe_token, subscribed_at",
        )
        .bind(email.as_str())
        .bind(unsubscribe_token.as_str())
        .bind(subscribed_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Subscriber::try_from(row)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<Subscriber>> {
        let row = sqlx::query_as::<_, SubscriberRow>(
            "SELECT id, email, active, unsubscribe_token, subscribed_at
             FROM subscribers WHERE email = $1",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Subscriber::try_from).transpose()
    }

    async fn find_by_token(&self, token: &UnsubscribeToken) -> DomainResult<Option<Subscriber>> {
        let row = sqlx::query_as::<_, SubscriberRow>(
            "SELECT id, email, active, unsubscribe_token, subscribed_at
             FROM subscribers WHERE unsubscribe_token = $1",
        )
        .bind(token.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Subscriber::try_from).transpose()
    }

    async fn list_active(&self) -> DomainResult<Vec<Subscriber>> {
        let rows = sqlx::query_as::<_, SubscriberRow>(
            "SELECT id, email, active, unsubscribe_token, subscribed_at
             FROM subscribers WHERE active = TRUE ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Subscriber::try_from).collect()
    }

    async fn set_active(&self, id: SubscriberId, active: bool) -> DomainResult<Subscriber> {
        let row = sqlx::query_as::<_, SubscriberRow>(
            "UPDATE subscribers SET active = $2 WHERE id = $1
             RETURNING id, email, active, unsubscribe_token, subscribed_at",
        )
        .bind(i64::from(id))
        .bind(active)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = row.ok_or_else(|| DomainError::NotFound("subscriber not found".into()))?;
        Subscriber::try_from(row)
    }

    async fn list_page(
        &self,
        limit: u32,
        after_id: Option<SubscriberId>,
    ) -> DomainResult<(Vec<Subscriber>, Option<SubscriberId>)> {
        let limit = limit.clamp(1, 200);
        let fetch_limit = i64::from(limit) + 1;

        let rows = sqlx::query_as::<_, SubscriberRow>(
            "SELECT id, email, active, unsubscribe_token, subscribed_at
             FROM subscribers WHERE id > $1 ORDER BY id LIMIT $2",
        )
        .bind(after_id.map(i64::from).unwrap_or(0))
        .bind(fetch_limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut subscribers = rows
            .into_iter()
            .map(Subscriber::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut next_id = None;
        if subscribers.len() > limit as usize {
            subscribers.pop();
            next_id = subscribers.last().map(|last| last.id);
        }

        Ok((subscribers, next_id))
    }
}
