pub mod cursor;
pub mod entity;
pub mod repository;

pub use cursor::DeliveryLogCursor;
pub use entity::{DeliveryRecord, DeliveryStatus, NewDeliveryRecord};
pub use repository::DeliveryLogRepository;
