use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct WelcomeResponse {
    #[schema(example = "Welcome to Kitty's Foraging Log API")]
    pub message: String,
}

/// Documentation shape of `models::ForageItem`.
#[derive(Serialize, ToSchema)]
pub struct ForageItemDoc {
    /// Unique ID for the item
    #[schema(example = 1)]
    pub id: i64,
    /// Name of the mushroom or berry
    #[schema(example = "Chanterelle")]
    pub name: String,
    /// Either 'mushroom' or 'berry'
    #[serde(rename = "type")]
    #[schema(example = "mushroom")]
    pub item_type: String,
    /// Where it was found
    #[schema(example = "Grimsta Naturreservat")]
    pub location: String,
    /// Date of the foraging event
    #[schema(format = Date, example = "2025-07-21")]
    pub date: String,
    /// Whether the item is safe to eat
    #[schema(example = true)]
    pub is_edible: bool,
    /// Extra notes
    #[schema(example = "Found under pine trees")]
    pub notes: Option<String>,
    /// Optional image link
    #[schema(example = "https://example.com/photo.jpg")]
    pub photo_url: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct FieldErrorDoc {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(ToSchema)]
pub struct ErrorResponseDoc {
    pub error: String,
    pub message: Option<String>,
    pub details: Option<Vec<FieldErrorDoc>>,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Foraging Log API", description = "Submit and list foraging log entries."),
    paths(
        crate::routes::welcome,
        crate::routes::health,
        crate::routes::items::create_item,
        crate::routes::items::list_items,
    ),
    components(
        schemas(
            HealthResponse,
            WelcomeResponse,
            ForageItemDoc,
            FieldErrorDoc,
            ErrorResponseDoc,
        )
    ),
    tags(
        (name = "meta"),
        (name = "items")
    )
)]
pub struct ApiDoc;
