// src/presentation/http/controllers/mod.rs
pub mod newsletter;
pub mod posts;
pub mod subscriptions;
