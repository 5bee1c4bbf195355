// src/application/commands/newsletter/mod.rs
mod announce;
mod bulletin;
mod service;

pub use announce::AnnouncePostCommand;
pub use bulletin::SendBulletinCommand;
pub use service::NewsletterService;
