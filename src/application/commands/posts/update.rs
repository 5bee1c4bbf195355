use super::PostCommandService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{Post, PostBody, PostCategory, PostId, PostTitle, PostUpdate},
};

pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
    pub publish: Option<bool>,
}

impl PostCommandService {
    pub async fn update_post(&self, command: UpdatePostCommand) -> ApplicationResult<PostDto> {
        let id = PostId::new(command.id)?;
        let mut post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let UpdatePostCommand {
            id: _,
            title,
            body,
            category,
            publish,
        } = command;
        let original_updated_at = post.updated_at;
        let mut update = PostUpdate::new(id, original_updated_at);

        let title_opt = title.map(PostTitle::new).transpose()?;
        let body_opt = body.map(PostBody::new).transpose()?;
        let category_opt = category
            .as_deref()
            .map(PostCategory::parse)
            .transpose()?;

        update = self
            .apply_content_updates(&mut post, title_opt, body_opt, category_opt, update)
            .await?;

        if let Some(publish_flag) = publish {
            update = self.apply_publish_update(&mut post, publish_flag, update);
        }

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }

    async fn apply_content_updates(
        &self,
        post: &mut Post,
        title_opt: Option<PostTitle>,
        body_opt: Option<PostBody>,
        category_opt: Option<PostCategory>,
        mut update: PostUpdate,
    ) -> ApplicationResult<PostUpdate> {
        if title_opt.is_none() && body_opt.is_none() && category_opt.is_none() {
            return Ok(update);
        }

        let now = self.clock.now();
        let new_title = title_opt.clone().unwrap_or_else(|| post.title.clone());
        let new_body = body_opt.unwrap_or_else(|| post.body.clone());
        let new_category = category_opt.unwrap_or(post.category);
        post.set_content(new_title.clone(), new_body.clone(), new_category, now);
        update = update
            .with_title(new_title)
            .with_body(new_body)
            .with_category(new_category);
        update.set_updated_at(post.updated_at);

        // A changed title invalidates the slug; derive a fresh one that is
        // allowed to collide with the post itself.
        if let Some(title) = &title_opt {
            let slug = self.slug_service.generate(title, Some(post.id)).await?;
            post.set_slug(slug.clone(), now);
            update = update.with_slug(slug);
            update.set_updated_at(post.updated_at);
        }

        Ok(update)
    }

    fn apply_publish_update(
        &self,
        post: &mut Post,
        publish_flag: bool,
        mut update: PostUpdate,
    ) -> PostUpdate {
        if publish_flag != post.published {
            let now = self.clock.now();
            if publish_flag {
                post.publish(now);
            } else {
                post.unpublish(now);
            }
            update = update.with_publish_state(post.published, post.published_at);
            update.set_updated_at(post.updated_at);
        }

        update
    }
}
