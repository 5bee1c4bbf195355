// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostBody, PostCategory, PostId, PostListCursor, PostReadRepository, PostSlug,
    PostTitle, PostUpdate, PostWriteRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const POST_COLUMNS: &str =
    "id, title, slug, body, category, published, published_at, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    body: String,
    category: String,
    published: bool,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            slug: PostSlug::new(row.slug)?,
            body: PostBody::new(row.body)?,
            category: PostCategory::parse(&row.category)?,
            published: row.published,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            body,
            category,
            published,
            published_at,
            created_at,
            updated_at,
        } = post;

        let row = sqlx::query_as::<_, PostRow>(
            "INSERT INTO posts (title, slug, body, category, published, published_at, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING id, title, slug, body, category, published, published_at, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(body.as_str())
        .bind(category.as_str())
        .bind(published)
        .bind(published_at)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            slug,
            body,
            category,
            publish_state,
            original_updated_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            let title_str: String = title.into();
            builder.push(", title = ");
            builder.push_bind(title_str);
        }

        if let Some(slug) = slug {
            let slug_str: String = slug.into();
            builder.push(", slug = ");
            builder.push_bind(slug_str);
        }

        if let Some(body) = body {
            let body_str: String = body.into();
            builder.push(", body = ");
            builder.push_bind(body_str);
        }

        if let Some(category) = category {
            builder.push(", category = ");
            builder.push_bind(category.as_str());
        }

        if let Some(state) = publish_state {
            builder.push(", published = ");
            builder.push_bind(state.published);
            builder.push(", published_at = ");
            builder.push_bind(state.published_at);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(
            " RETURNING id, title, slug, body, category, published, published_at, created_at, updated_at",
        );

        let maybe_row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row
            .ok_or_else(|| DomainError::Conflict("post update conflict, please retry".into()))?;

        Post::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

impl PostgresPostReadRepository {
    fn apply_conditions<'a>(
        builder: &mut QueryBuilder<'a, Postgres>,
        include_unpublished: bool,
        category: Option<PostCategory>,
        cursor: Option<&'a PostListCursor>,
    ) {
        let mut has_where = false;
        if !include_unpublished {
            builder.push(" WHERE published = TRUE");
            has_where = true;
        }

        if let Some(category) = category {
            if has_where {
                builder.push(" AND ");
            } else {
                builder.push(" WHERE ");
                has_where = true;
            }
            builder.push("category = ");
            builder.push_bind(category.as_str());
        }

        if let Some(cursor) = cursor {
            if has_where {
                builder.push(" AND ");
            } else {
                builder.push(" WHERE ");
            }
            builder.push("(created_at, id) < (");
            builder.push_bind(cursor.created_at);
            builder.push(", ");
            builder.push_bind(i64::from(cursor.post_id));
            builder.push(")");
        }
    }

    async fn fetch_page(
        &self,
        include_unpublished: bool,
        category: Option<PostCategory>,
        limit: u32,
        cursor: Option<&PostListCursor>,
    ) -> DomainResult<(Vec<Post>, Option<PostListCursor>)> {
        let limit = limit.clamp(1, 100);
        let fetch_limit = i64::from(limit) + 1;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {POST_COLUMNS} FROM posts"));
        Self::apply_conditions(&mut builder, include_unpublished, category, cursor);
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(fetch_limit);

        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut posts = rows
            .into_iter()
            .map(Post::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut next_cursor = None;
        if posts.len() > limit as usize {
            posts.pop();
            if let Some(last) = posts.last() {
                next_cursor = Some(PostListCursor::from_parts(last.created_at, last.id));
            }
        }

        Ok((posts, next_cursor))
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, slug, body, category, published, published_at, created_at, updated_at
             FROM posts WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, slug, body, category, published, published_at, created_at, updated_at
             FROM posts WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list_page(
        &self,
        include_unpublished: bool,
        category: Option<PostCategory>,
        limit: u32,
        cursor: Option<PostListCursor>,
    ) -> DomainResult<(Vec<Post>, Option<PostListCursor>)> {
        self.fetch_page(include_unpublished, category, limit, cursor.as_ref())
            .await
    }
}
