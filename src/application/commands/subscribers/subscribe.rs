// src/application/commands/subscribers/subscribe.rs
use super::SubscriberCommandService;
use crate::{
    application::{
        dto::SubscriberDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::subscriber::{EmailAddress, NewSubscriber, UnsubscribeToken},
};
use uuid::Uuid;

pub struct SubscribeCommand {
    pub email: String,
}

impl SubscriberCommandService {
    /// Signs an address up for the newsletter. A previously unsubscribed
    /// address is reactivated, an already active one is a conflict.
    pub async fn subscribe(&self, command: SubscribeCommand) -> ApplicationResult<SubscriberDto> {
        let email = EmailAddress::new(command.email)?;

        match self.repo.find_by_email(&email).await? {
            Some(existing) if existing.active => {
                Err(ApplicationError::conflict("email already subscribed"))
            }
            Some(existing) => {
                let reactivated = self.repo.set_active(existing.id, true).await?;
                Ok(reactivated.into())
            }
            None => {
                let token = UnsubscribeToken::new(Uuid::new_v4().simple().to_string())?;
                let created = self
                    .repo
                    .insert(NewSubscriber {
                        email,
                        unsubscribe_token: token,
                        subscribed_at: self.clock.now(),
                    })
                    .await?;
                Ok(created.into())
            }
        }
    }
}
