pub mod delivery;
pub mod posts;
pub mod subscribers;
