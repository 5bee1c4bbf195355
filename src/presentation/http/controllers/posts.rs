// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{
        CreatePostCommand, DeletePostCommand, SetPublishStateCommand, UpdatePostCommand,
    },
    dto::{CursorPage, PostDto},
    queries::posts::{GetPostBySlugQuery, ListPostsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use serde_json::json;

fn default_limit() -> u32 {
    20
}

#[derive(Debug, Deserialize)]
pub struct PostListParams {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub include_unpublished: bool,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub body: String,
    pub category: String,
    #[serde(default)]
    pub publish: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
    pub publish: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct PublishRequest {
    pub publish: bool,
}

pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PostListParams>,
) -> HttpResult<Json<CursorPage<PostDto>>> {
    state
        .services
        .post_queries
        .list_posts(ListPostsQuery {
            category: params.category,
            include_unpublished: params.include_unpublished,
            limit: params.limit,
            cursor: params.cursor,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_post_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post_by_slug(GetPostBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreatePostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = CreatePostCommand {
        title: payload.title,
        body: payload.body,
        category: payload.category,
        publish: payload.publish,
    };

    state
        .services
        .post_commands
        .create_post(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = UpdatePostCommand {
        id,
        title: payload.title,
        body: payload.body,
        category: payload.category,
        publish: payload.publish,
    };

    state
        .services
        .post_commands
        .update_post(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .post_commands
        .delete_post(DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

pub async fn set_publish_state(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<PublishRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = SetPublishStateCommand {
        id,
        publish: payload.publish,
    };

    state
        .services
        .post_commands
        .set_publish_state(command)
        .await
        .into_http()
        .map(Json)
}
