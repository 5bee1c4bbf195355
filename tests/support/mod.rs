// tests/support/mod.rs
#![allow(dead_code)]

pub mod mocks;

pub use mocks::{
    CapturingDeliveryRepo, FixedClock, InMemoryPostRepo, InMemorySubscriberRepo, ProbeCountingRepo,
    ScriptedMailer, SteppingClock, fixed_now, sample_post, sample_subscriber,
};
