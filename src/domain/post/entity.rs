// src/domain/post/entity.rs
use crate::domain::post::value_objects::{PostBody, PostCategory, PostId, PostSlug, PostTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: PostSlug,
    pub body: PostBody,
    pub category: PostCategory,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.published = true;
        self.published_at = Some(now);
        self.updated_at = now;
    }

    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        self.published = false;
        self.published_at = None;
        self.updated_at = now;
    }

    pub fn set_slug(&mut self, slug: PostSlug, now: DateTime<Utc>) {
        self.slug = slug;
        self.updated_at = now;
    }

    pub fn set_content(
        &mut self,
        title: PostTitle,
        body: PostBody,
        category: PostCategory,
        now: DateTime<Utc>,
    ) {
        self.title = title;
        self.body = body;
        self.category = category;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: PostSlug,
    pub body: PostBody,
    pub category: PostCategory,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PublishStateUpdate {
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

/// Partial update guarded by the `updated_at` value the caller read.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub slug: Option<PostSlug>,
    pub body: Option<PostBody>,
    pub category: Option<PostCategory>,
    pub publish_state: Option<PublishStateUpdate>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            body: None,
            category: None,
            publish_state: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: PostSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_body(mut self, body: PostBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_category(mut self, category: PostCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_publish_state(
        mut self,
        published: bool,
        published_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.publish_state = Some(PublishStateUpdate {
            published,
            published_at,
        });
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post {
            id: PostId::new(1).unwrap(),
            title: PostTitle::new("title").unwrap(),
            slug: PostSlug::new("title-abcd1234").unwrap(),
            body: PostBody::new("body").unwrap(),
            category: PostCategory::News,
            published: false,
            published_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn publish_sets_state() {
        let mut post = sample_post();
        let now = Utc::now();
        post.publish(now);
        assert!(post.published);
        assert_eq!(post.published_at, Some(now));
        assert_eq!(post.updated_at, now);
    }

    #[test]
    fn unpublish_clears_timestamp() {
        let mut post = sample_post();
        let now = Utc::now();
        post.publish(now);
        let later = now + chrono::Duration::seconds(10);
        post.unpublish(later);
        assert!(!post.published);
        assert!(post.published_at.is_none());
        assert_eq!(post.updated_at, later);
    }

    #[test]
    fn set_content_updates_fields() {
        let mut post = sample_post();
        let now = Utc::now();
        let title = PostTitle::new("new title").unwrap();
        let body = PostBody::new("new body").unwrap();
        post.set_content(title.clone(), body.clone(), PostCategory::Vacancy, now);
        assert_eq!(post.title, title);
        assert_eq!(post.body, body);
        assert_eq!(post.category, PostCategory::Vacancy);
        assert_eq!(post.updated_at, now);
    }
}
