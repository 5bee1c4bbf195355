// src/application/commands/subscribers/service.rs
use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::subscriber::SubscriberRepository};

pub struct SubscriberCommandService {
    pub(super) repo: Arc<dyn SubscriberRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl SubscriberCommandService {
    pub fn new(repo: Arc<dyn SubscriberRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}
