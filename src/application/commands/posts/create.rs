// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::post::{NewPost, PostBody, PostCategory, PostTitle},
};

pub struct CreatePostCommand {
    pub title: String,
    pub body: String,
    pub category: String,
    pub publish: bool,
}

impl PostCommandService {
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let body = PostBody::new(command.body)?;
        let category = PostCategory::parse(&command.category)?;
        let now = self.clock.now();

        let slug = self.slug_service.generate(&title, None).await?;

        let new_post = NewPost {
            title,
            slug,
            body,
            category,
            published: command.publish,
            published_at: if command.publish { Some(now) } else { None },
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_post).await?;
        Ok(created.into())
    }
}
