// src/presentation/http/controllers/subscriptions.rs
use crate::application::{
    commands::subscribers::{SubscribeCommand, UnsubscribeCommand},
    dto::{CursorPage, SubscriberDto},
    queries::subscribers::ListSubscribersQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}

fn default_limit() -> u32 {
    50
}

#[derive(Debug, Deserialize)]
pub struct SubscriberListParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub after_id: Option<i64>,
}

pub async fn subscribe(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SubscribeRequest>,
) -> HttpResult<Json<SubscriberDto>> {
    state
        .services
        .subscriber_commands
        .subscribe(SubscribeCommand {
            email: payload.email,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn unsubscribe(
    Extension(state): Extension<HttpState>,
    Path(token): Path<String>,
) -> HttpResult<Json<SubscriberDto>> {
    state
        .services
        .subscriber_commands
        .unsubscribe(UnsubscribeCommand { token })
        .await
        .into_http()
        .map(Json)
}

pub async fn list_subscribers(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SubscriberListParams>,
) -> HttpResult<Json<CursorPage<SubscriberDto>>> {
    state
        .services
        .subscriber_queries
        .list_subscribers(ListSubscribersQuery {
            limit: params.limit,
            after_id: params.after_id,
        })
        .await
        .into_http()
        .map(Json)
}
