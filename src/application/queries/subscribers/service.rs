use std::sync::Arc;

use crate::domain::subscriber::SubscriberRepository;

pub struct SubscriberQueryService {
    pub(super) repo: Arc<dyn SubscriberRepository>,
}

impl SubscriberQueryService {
    pub fn new(repo: Arc<dyn SubscriberRepository>) -> Self {
        Self { repo }
    }
}
