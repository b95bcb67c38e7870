use std::net::SocketAddr;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::{FieldError, ValidationErrors};
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;

/// Message returned when a create collides with an existing id.
pub const DUPLICATE_ID_MESSAGE: &str = "Item with this ID already exists.";

/// JSON error response: `{"error", "message", "details"}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: String,
    pub message: Option<String>,
    pub details: Vec<FieldError>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "no_details")]
    details: &'a [FieldError],
}

fn no_details(details: &&[FieldError]) -> bool {
    details.is_empty()
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: impl Into<String>, message: Option<String>) -> Self {
        Self { status, error: error.into(), message, details: Vec::new() }
    }

    pub fn validation(errs: ValidationErrors) -> Self {
        let message = errs.to_string();
        Self {
            details: errs.0,
            ..Self::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error", Some(message))
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: &self.error,
            message: self.message.as_deref(),
            details: &self.details,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::DuplicateIdentifier(_) => JsonApiError::new(
                StatusCode::BAD_REQUEST,
                "Duplicate Identifier",
                Some(DUPLICATE_ID_MESSAGE.into()),
            ),
            ServiceError::Validation(errs) => JsonApiError::validation(errs),
        }
    }
}

// Unparseable bodies are a validation failure of the body as a whole. A body
// that could not be read at all (e.g. over the size limit) keeps axum's status.
impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match rejection {
            JsonRejection::BytesRejection(_) => {
                let status = rejection.status();
                let title = status.canonical_reason().unwrap_or("Bad Request");
                return JsonApiError::new(status, title, Some(rejection.body_text()));
            }
            JsonRejection::MissingJsonContentType(_) => "content_type",
            _ => "json_invalid",
        };
        JsonApiError::validation(ValidationErrors::single(FieldError::body(kind, rejection.body_text())))
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}
