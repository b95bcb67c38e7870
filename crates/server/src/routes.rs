pub mod items;

use axum::{routing::get, Json, Router};
use common::types::{Health, Welcome, WELCOME_MESSAGE};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

#[utoipa::path(get, path = "/", tag = "meta", responses((status = 200, description = "Welcome", body = crate::openapi::WelcomeResponse)))]
pub async fn welcome() -> Json<Welcome> {
    Json(Welcome::new(WELCOME_MESSAGE))
}

#[utoipa::path(get, path = "/health", tag = "meta", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the application router. `/docs` and `/openapi.json` are mounted only
/// when `docs_enabled` is set.
pub fn build_router(state: ServerState, cors: CorsLayer, docs_enabled: bool) -> Router {
    let mut router = Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .route("/items", get(items::list_items).post(items::create_item));

    if docs_enabled {
        router = router.merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()));
    }

    router
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx and friends
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
