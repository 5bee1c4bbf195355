// tests/support/mocks/mod.rs
#![allow(dead_code)]

pub mod delivery;
pub mod mailer;
pub mod post_repos;
pub mod subscriber_repo;
pub mod time;

pub use delivery::CapturingDeliveryRepo;
pub use mailer::ScriptedMailer;
pub use post_repos::{InMemoryPostRepo, ProbeCountingRepo, sample_post};
pub use subscriber_repo::{InMemorySubscriberRepo, sample_subscriber};
pub use time::{FixedClock, SteppingClock, fixed_now};
