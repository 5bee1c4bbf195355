// src/presentation/http/controllers/newsletter.rs
use crate::application::{
    commands::newsletter::{AnnouncePostCommand, SendBulletinCommand},
    dto::{CursorPage, DeliveryRecordDto, DispatchOutcome},
    queries::delivery::ListDeliveriesQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SendBulletinRequest {
    pub subject: String,
    pub html_body: String,
}

fn default_limit() -> u32 {
    50
}

#[derive(Debug, Deserialize)]
pub struct DeliveryListParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub cursor: Option<String>,
}

pub async fn announce_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<DispatchOutcome>> {
    state
        .services
        .newsletter
        .announce_post(AnnouncePostCommand { post_id: id })
        .await
        .into_http()
        .map(Json)
}

pub async fn send_bulletin(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SendBulletinRequest>,
) -> HttpResult<Json<DispatchOutcome>> {
    state
        .services
        .newsletter
        .send_bulletin(SendBulletinCommand {
            subject: payload.subject,
            html_body: payload.html_body,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn list_deliveries(
    Extension(state): Extension<HttpState>,
    Query(params): Query<DeliveryListParams>,
) -> HttpResult<Json<CursorPage<DeliveryRecordDto>>> {
    state
        .services
        .delivery_queries
        .list_deliveries(ListDeliveriesQuery {
            limit: params.limit,
            cursor: params.cursor,
        })
        .await
        .into_http()
        .map(Json)
}
