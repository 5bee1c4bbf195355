// src/application/commands/newsletter/bulletin.rs
use super::NewsletterService;
use crate::application::{
    dto::DispatchOutcome,
    error::{ApplicationError, ApplicationResult},
};

pub struct SendBulletinCommand {
    pub subject: String,
    pub html_body: String,
}

impl NewsletterService {
    /// Ad-hoc newsletter: the admin supplies subject and body directly, so
    /// there is no published-post precondition.
    pub async fn send_bulletin(
        &self,
        command: SendBulletinCommand,
    ) -> ApplicationResult<DispatchOutcome> {
        if command.subject.trim().is_empty() {
            return Err(ApplicationError::validation("subject cannot be empty"));
        }
        if command.html_body.trim().is_empty() {
            return Err(ApplicationError::validation("body cannot be empty"));
        }

        self.dispatch(None, &command.subject, &command.html_body)
            .await
    }
}
