// src/application/commands/posts/publish.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{PostId, PostUpdate},
};

pub struct SetPublishStateCommand {
    pub id: i64,
    pub publish: bool,
}

impl PostCommandService {
    pub async fn set_publish_state(
        &self,
        command: SetPublishStateCommand,
    ) -> ApplicationResult<PostDto> {
        let id = PostId::new(command.id)?;
        let mut post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        let original_updated_at = post.updated_at;

        if post.published == command.publish {
            return Ok(post.into());
        }

        let now = self.clock.now();
        if command.publish {
            post.publish(now);
        } else {
            post.unpublish(now);
        }

        let mut update = PostUpdate::new(id, original_updated_at)
            .with_publish_state(post.published, post.published_at);
        update.set_updated_at(post.updated_at);
        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}
