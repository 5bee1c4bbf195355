// tests/support/mocks/post_repos.rs
use async_trait::async_trait;
use newsdesk_core::domain::errors::{DomainError, DomainResult};
use newsdesk_core::domain::post::{
    NewPost, Post, PostBody, PostCategory, PostId, PostListCursor, PostReadRepository, PostSlug,
    PostTitle, PostUpdate, PostWriteRepository,
};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn sample_post(id: i64, title: &str, slug: &str, published: bool) -> Post {
    let now = super::time::fixed_now();
    Post {
        id: PostId::new(id).unwrap(),
        title: PostTitle::new(title).unwrap(),
        slug: PostSlug::new(slug).unwrap(),
        body: PostBody::new("<p>body</p>").unwrap(),
        category: PostCategory::News,
        published,
        published_at: if published { Some(now) } else { None },
        created_at: now,
        updated_at: now,
    }
}

/// In-memory post store backing both repository traits.
#[derive(Default)]
pub struct InMemoryPostRepo {
    inner: Mutex<HashMap<i64, Post>>,
    next_id: Mutex<i64>,
}

impl InMemoryPostRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            next_id: Mutex::new(1),
        }
    }

    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let map: HashMap<i64, Post> = posts
            .into_iter()
            .map(|post| (i64::from(post.id), post))
            .collect();
        let next_id = map.keys().max().copied().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(map),
            next_id: Mutex::new(next_id),
        }
    }

    pub fn get(&self, id: i64) -> Option<Post> {
        self.inner.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryPostRepo {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut map = self.inner.lock().unwrap();
        if map.values().any(|existing| existing.slug == post.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        let mut next_id = self.next_id.lock().unwrap();
        let id = PostId::new(*next_id)?;
        *next_id += 1;

        let stored = Post {
            id,
            title: post.title,
            slug: post.slug,
            body: post.body,
            category: post.category,
            published: post.published,
            published_at: post.published_at,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        map.insert(i64::from(id), stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut map = self.inner.lock().unwrap();
        let post = map
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        if post.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "post update conflict, please retry".into(),
            ));
        }

        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(slug) = update.slug {
            post.slug = slug;
        }
        if let Some(body) = update.body {
            post.body = body;
        }
        if let Some(category) = update.category {
            post.category = category;
        }
        if let Some(state) = update.publish_state {
            post.published = state.published;
            post.published_at = state.published_at;
        }
        post.updated_at = update.updated_at;

        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut map = self.inner.lock().unwrap();
        map.remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("post not found".into()))
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostRepo {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.inner.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .values()
            .find(|post| &post.slug == slug)
            .cloned())
    }

    async fn list_page(
        &self,
        include_unpublished: bool,
        category: Option<PostCategory>,
        limit: u32,
        _cursor: Option<PostListCursor>,
    ) -> DomainResult<(Vec<Post>, Option<PostListCursor>)> {
        let mut posts: Vec<Post> = self
            .inner
            .lock()
            .unwrap()
            .values()
            .filter(|post| include_unpublished || post.published)
            .filter(|post| category.is_none_or(|c| post.category == c))
            .cloned()
            .collect();
        posts.sort_by(|a, b| {
            (b.created_at, i64::from(b.id)).cmp(&(a.created_at, i64::from(a.id)))
        });
        posts.truncate(limit as usize);
        Ok((posts, None))
    }
}

/// Read repository scripted to report every probed slug as taken (or free),
/// counting the uniqueness probes the slug service performs.
pub struct ProbeCountingRepo {
    taken_owner: Option<i64>,
    pub probes: AtomicUsize,
}

impl ProbeCountingRepo {
    /// Every probe reports the slug as free.
    pub fn empty() -> Self {
        Self {
            taken_owner: None,
            probes: AtomicUsize::new(0),
        }
    }

    /// Every probe reports the slug as taken by the post with this id.
    pub fn always_taken(owner_id: i64) -> Self {
        Self {
            taken_owner: Some(owner_id),
            probes: AtomicUsize::new(0),
        }
    }

    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PostReadRepository for ProbeCountingRepo {
    async fn find_by_id(&self, _id: PostId) -> DomainResult<Option<Post>> {
        Ok(None)
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        self.probes.fetch_add(1, Ordering::SeqCst);
        Ok(self.taken_owner.map(|owner_id| {
            let mut hit = sample_post(owner_id, "owner", "owner-slug", true);
            hit.slug = slug.clone();
            hit
        }))
    }

    async fn list_page(
        &self,
        _include_unpublished: bool,
        _category: Option<PostCategory>,
        _limit: u32,
        _cursor: Option<PostListCursor>,
    ) -> DomainResult<(Vec<Post>, Option<PostListCursor>)> {
        Ok((vec![], None))
    }
}
