// src/application/commands/newsletter/announce.rs
use super::NewsletterService;
use crate::{
    application::{
        dto::DispatchOutcome,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{Post, PostId},
};

pub struct AnnouncePostCommand {
    pub post_id: i64,
}

impl NewsletterService {
    /// Announces a published post to every active subscriber. An unknown or
    /// unpublished post fails the whole run before anything is sent.
    pub async fn announce_post(
        &self,
        command: AnnouncePostCommand,
    ) -> ApplicationResult<DispatchOutcome> {
        let id = PostId::new(command.post_id)?;
        let post = self
            .post_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if !post.published {
            return Err(ApplicationError::validation(
                "cannot announce an unpublished post",
            ));
        }

        let subject = format!("New on the institute site: {}", post.title);
        let html_body = self.render_announcement(&post);
        self.dispatch(Some(post.id), &subject, &html_body).await
    }

    fn render_announcement(&self, post: &Post) -> String {
        let permalink = format!("{}/posts/by-slug/{}", self.public_base_url, post.slug);
        format!(
            "<h1>{}</h1>\n{}\n<p><a href=\"{permalink}\">Read on the site</a></p>",
            post.title,
            post.body.as_str(),
        )
    }
}
