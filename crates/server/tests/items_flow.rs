use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use service::items::InMemoryItemStore;
use tower::ServiceExt;

use server::routes;
use server::state::ServerState;

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

fn build_app() -> Router {
    let state = ServerState::new(InMemoryItemStore::new());
    routes::build_router(state, cors(), true)
}

fn chanterelle() -> Value {
    json!({
        "id": 1,
        "name": "Chanterelle",
        "type": "mushroom",
        "location": "Grimsta",
        "date": "2025-07-21",
        "is_edible": true
    })
}

fn post_json(body: &Value) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method("POST")
        .uri("/items")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body)?))?)
}

fn get(uri: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder().method("GET").uri(uri).body(Body::empty())?)
}

async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, body))
}

#[tokio::test]
async fn welcome_message() -> anyhow::Result<()> {
    let app = build_app();
    let (status, body) = send(&app, get("/")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Welcome to Kitty's Foraging Log API"}));
    Ok(())
}

#[tokio::test]
async fn list_starts_empty() -> anyhow::Result<()> {
    let app = build_app();
    let (status, body) = send(&app, get("/items")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    Ok(())
}

#[tokio::test]
async fn create_list_and_reject_duplicate() -> anyhow::Result<()> {
    let app = build_app();

    let (status, created) = send(&app, post_json(&chanterelle())?).await?;
    assert_eq!(status, StatusCode::CREATED);
    let mut expected = chanterelle();
    expected["notes"] = Value::Null;
    expected["photo_url"] = Value::Null;
    assert_eq!(created, expected);

    let (status, listed) = send(&app, get("/items")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([expected]));

    let (status, err) = send(&app, post_json(&chanterelle())?).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["message"], "Item with this ID already exists.");

    let (_, listed) = send(&app, get("/items")?).await?;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn items_keep_insertion_order() -> anyhow::Result<()> {
    let app = build_app();
    let mut first = chanterelle();
    first["id"] = json!(10);
    let mut second = chanterelle();
    second["id"] = json!(2);
    second["name"] = json!("Lingonberry");
    second["type"] = json!("berry");

    assert_eq!(send(&app, post_json(&first)?).await?.0, StatusCode::CREATED);
    assert_eq!(send(&app, post_json(&second)?).await?.0, StatusCode::CREATED);

    let (_, listed) = send(&app, get("/items")?).await?;
    let ids: Vec<i64> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![10, 2]);
    Ok(())
}

#[tokio::test]
async fn optional_fields_are_echoed() -> anyhow::Result<()> {
    let app = build_app();
    let mut body = chanterelle();
    body["notes"] = json!("Found under pine trees");
    body["photo_url"] = json!("https://example.com/photo.jpg");
    let (status, created) = send(&app, post_json(&body)?).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["notes"], "Found under pine trees");
    assert_eq!(created["photo_url"], "https://example.com/photo.jpg");
    Ok(())
}

#[tokio::test]
async fn missing_name_is_unprocessable_and_not_stored() -> anyhow::Result<()> {
    let app = build_app();
    let mut body = chanterelle();
    body.as_object_mut().unwrap().remove("name");

    let (status, err) = send(&app, post_json(&body)?).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err["details"][0]["loc"], json!(["body", "name"]));
    assert_eq!(err["details"][0]["type"], "missing");

    let (_, listed) = send(&app, get("/items")?).await?;
    assert_eq!(listed, json!([]));
    Ok(())
}

#[tokio::test]
async fn non_url_photo_is_unprocessable() -> anyhow::Result<()> {
    let app = build_app();
    let mut body = chanterelle();
    body["photo_url"] = json!("not-a-url");
    let (status, err) = send(&app, post_json(&body)?).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err["details"][0]["loc"], json!(["body", "photo_url"]));
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_unprocessable() -> anyhow::Result<()> {
    let app = build_app();
    let req = Request::builder()
        .method("POST")
        .uri("/items")
        .header("content-type", "application/json")
        .body(Body::from("{\"id\": 1,"))?;
    let (status, err) = send(&app, req).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err["details"][0]["loc"], json!(["body"]));
    assert_eq!(err["details"][0]["type"], "json_invalid");
    Ok(())
}

#[tokio::test]
async fn missing_content_type_is_unprocessable() -> anyhow::Result<()> {
    let app = build_app();
    let req = Request::builder()
        .method("POST")
        .uri("/items")
        .body(Body::from(serde_json::to_vec(&chanterelle())?))?;
    let (status, err) = send(&app, req).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err["details"][0]["type"], "content_type");
    Ok(())
}

#[tokio::test]
async fn openapi_document_is_served() -> anyhow::Result<()> {
    let app = build_app();
    let (status, doc) = send(&app, get("/openapi.json")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/items"].is_object());
    Ok(())
}

#[tokio::test]
async fn docs_can_be_disabled() -> anyhow::Result<()> {
    let app = routes::build_router(ServerState::new(InMemoryItemStore::new()), cors(), false);
    let resp = app.oneshot(get("/openapi.json")?).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn oversized_body_keeps_payload_too_large_status() -> anyhow::Result<()> {
    let app = build_app();
    let mut body = chanterelle();
    body["notes"] = json!("x".repeat(3 * 1024 * 1024));
    let (status, err) = send(&app, post_json(&body)?).await?;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(err["error"], "Payload Too Large");
    assert!(err.get("details").is_none());

    let (_, listed) = send(&app, get("/items")?).await?;
    assert_eq!(listed, json!([]));
    Ok(())
}
