pub mod database;
pub mod digest;
pub mod mailer;
pub mod repositories;
pub mod time;
