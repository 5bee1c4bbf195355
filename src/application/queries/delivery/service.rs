use std::sync::Arc;

use crate::domain::delivery::DeliveryLogRepository;

pub struct DeliveryQueryService {
    pub(super) repo: Arc<dyn DeliveryLogRepository>,
}

impl DeliveryQueryService {
    pub fn new(repo: Arc<dyn DeliveryLogRepository>) -> Self {
        Self { repo }
    }
}
