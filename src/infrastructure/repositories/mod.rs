// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_delivery_log;
mod postgres_post;
mod postgres_subscriber;

pub(crate) use error::map_sqlx;
pub use postgres_delivery_log::PostgresDeliveryLogRepository;
pub use postgres_post::{PostgresPostReadRepository, PostgresPostWriteRepository};
pub use postgres_subscriber::PostgresSubscriberRepository;
