use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use models::{validate_item, ForageItem};
use serde_json::Value;
use service::errors::ServiceError;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[utoipa::path(
    post, path = "/items", tag = "items",
    request_body = crate::openapi::ForageItemDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ForageItemDoc),
        (status = 400, description = "Item with this ID already exists", body = crate::openapi::ErrorResponseDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn create_item(
    State(state): State<ServerState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ForageItem>), JsonApiError> {
    let Json(body) = body?;
    let item = validate_item(&body).map_err(|errs| {
        info!(errors = errs.errors().len(), "rejected invalid forage item");
        ServiceError::from(errs)
    })?;

    let created = state.item_store.create(item).await?;
    info!(id = created.id, item_name = %created.name, kind = %created.item_type, "created forage item");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/items", tag = "items",
    responses((status = 200, description = "All items in insertion order", body = [crate::openapi::ForageItemDoc]))
)]
pub async fn list_items(State(state): State<ServerState>) -> Json<Vec<ForageItem>> {
    let items = state.item_store.list_all().await;
    info!(count = items.len(), "list forage items");
    Json(items)
}
