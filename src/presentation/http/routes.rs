// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{newsletter, posts, subscriptions};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::Method,
    routing::{get, post, put},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route(
            "/api/v1/posts",
            get(posts::list_posts).post(posts::create_post),
        )
        .route("/api/v1/posts/by-slug/{slug}", get(posts::get_post_by_slug))
        .route(
            "/api/v1/posts/{id}",
            put(posts::update_post).delete(posts::delete_post),
        )
        .route("/api/v1/posts/{id}/publish", post(posts::set_publish_state))
        .route("/api/v1/posts/{id}/announce", post(newsletter::announce_post))
        .route("/api/v1/newsletters", post(newsletter::send_bulletin))
        .route(
            "/api/v1/newsletters/deliveries",
            get(newsletter::list_deliveries),
        )
        .route("/api/v1/subscriptions", post(subscriptions::subscribe))
        .route(
            "/api/v1/subscriptions/unsubscribe/{token}",
            get(subscriptions::unsubscribe),
        )
        .route("/api/v1/subscribers", get(subscriptions::list_subscribers))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
