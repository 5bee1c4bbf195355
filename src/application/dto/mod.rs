pub mod delivery;
pub mod dispatch;
pub mod pagination;
pub mod posts;
pub mod subscribers;

pub use delivery::DeliveryRecordDto;
pub use dispatch::DispatchOutcome;
pub use pagination::CursorPage;
pub use posts::PostDto;
pub use subscribers::SubscriberDto;
