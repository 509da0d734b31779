use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use pointr_store::EntityStore;
use pointr_types::{Building, EntityKind, Level, Site};
use tracing::warn;

use crate::error::ApiError;
use crate::payload::{
    decode_json, HealthResponse, LevelBatch, LevelPayload, QueryParams,
    SummaryResponse,
};

/// Store handle shared by every handler.
pub type SharedStore = Arc<dyn EntityStore>;

type Created<T> = (StatusCode, Json<T>);

/// Summary handler: entity counts.
pub async fn root_handler(State(store): State<SharedStore>) -> Json<SummaryResponse> {
    Json(SummaryResponse {
        message: "Pointr Mock API".into(),
        counts: store.counts(),
    })
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Unmatched paths.
pub async fn not_found_handler() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "route not found" })),
    )
        .into_response()
}

// -- sites --

pub async fn list_sites(State(store): State<SharedStore>) -> Json<Vec<Site>> {
    Json(store.list_sites())
}

pub async fn create_site(
    State(store): State<SharedStore>,
    body: Bytes,
) -> Result<Created<Site>, ApiError> {
    let site: Site = decode_json(&body)?;
    Ok((StatusCode::CREATED, Json(store.create_site(site))))
}

pub async fn get_site(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Site>, ApiError> {
    store
        .get_site(&id)
        .map(Json)
        .ok_or(ApiError::NotFound(EntityKind::Site))
}

pub async fn delete_site(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if store.delete_site(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(EntityKind::Site))
    }
}

// -- buildings --

pub async fn list_buildings(
    State(store): State<SharedStore>,
    Query(params): Query<QueryParams>,
) -> Json<Vec<Building>> {
    Json(store.list_buildings(params.first("site_id")))
}

pub async fn create_building(
    State(store): State<SharedStore>,
    body: Bytes,
) -> Result<Created<Building>, ApiError> {
    let building: Building = decode_json(&body)?;
    let created = store
        .create_building(building)
        .inspect_err(|e| warn!(error = %e, "building rejected"))?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_building(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Building>, ApiError> {
    store
        .get_building(&id)
        .map(Json)
        .ok_or(ApiError::NotFound(EntityKind::Building))
}

pub async fn delete_building(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if store.delete_building(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(EntityKind::Building))
    }
}

// -- levels --

pub async fn list_levels(
    State(store): State<SharedStore>,
    Query(params): Query<QueryParams>,
) -> Json<Vec<Level>> {
    Json(store.list_levels(params.first("building_id")))
}

/// Create one level, or a batch sent as `{"items": [...]}`.
///
/// A single level is answered with the level itself, a batch with the same
/// `{"items": [...]}` wrapper.
pub async fn create_levels(
    State(store): State<SharedStore>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let response = match LevelPayload::decode(&body)? {
        LevelPayload::Single(level) => {
            let created = store
                .create_level(level)
                .inspect_err(|e| warn!(error = %e, "level rejected"))?;
            (StatusCode::CREATED, Json(created)).into_response()
        }
        LevelPayload::Batch(levels) => {
            let count = levels.len();
            let items = store
                .create_levels(levels)
                .inspect_err(|e| warn!(error = %e, count, "level batch rejected"))?;
            (StatusCode::CREATED, Json(LevelBatch { items })).into_response()
        }
    };
    Ok(response)
}

pub async fn get_level(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Level>, ApiError> {
    store
        .get_level(&id)
        .map(Json)
        .ok_or(ApiError::NotFound(EntityKind::Level))
}
