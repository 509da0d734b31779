use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use pointr_types::EntityKind;
use serde_json::json;
use thiserror::Error;

/// Errors that stop the server from starting or serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Per-request failures, rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be decoded into the expected shape.
    #[error("{0}")]
    MalformedInput(String),

    #[error("{0} not found")]
    NotFound(EntityKind),

    /// A create was rejected by the store's parent checks.
    #[error(transparent)]
    Store(#[from] pointr_store::StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MalformedInput(_) | Self::Store(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
