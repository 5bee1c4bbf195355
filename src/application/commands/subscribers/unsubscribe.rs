// src/application/commands/subscribers/unsubscribe.rs
use super::SubscriberCommandService;
use crate::{
    application::{
        dto::SubscriberDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::subscriber::UnsubscribeToken,
};

pub struct UnsubscribeCommand {
    pub token: String,
}

impl SubscriberCommandService {
    /// Deactivates the subscriber owning the token. Idempotent: a second
    /// call with the same token succeeds without changing anything.
    pub async fn unsubscribe(&self, command: UnsubscribeCommand) -> ApplicationResult<SubscriberDto> {
        let token = UnsubscribeToken::new(command.token)?;
        let subscriber = self
            .repo
            .find_by_token(&token)
            .await?
            .ok_or_else(|| ApplicationError::not_found("unknown unsubscribe token"))?;

        if !subscriber.active {
            return Ok(subscriber.into());
        }

        let deactivated = self.repo.set_active(subscriber.id, false).await?;
        Ok(deactivated.into())
    }
}
