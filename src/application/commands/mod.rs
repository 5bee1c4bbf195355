pub mod newsletter;
pub mod posts;
pub mod subscribers;
