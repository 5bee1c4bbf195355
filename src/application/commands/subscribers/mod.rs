// src/application/commands/subscribers/mod.rs
mod service;
mod subscribe;
mod unsubscribe;

pub use service::SubscriberCommandService;
pub use subscribe::SubscribeCommand;
pub use unsubscribe::UnsubscribeCommand;
