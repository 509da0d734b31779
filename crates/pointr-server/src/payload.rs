//! Request and response bodies.

use pointr_types::{Level, StoreCounts};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// Message returned when a level body is neither a level nor a batch.
pub const LEVEL_PAYLOAD_HINT: &str = "provide a Level object or {items: [...]}";

fn malformed(e: serde_json::Error) -> ApiError {
    ApiError::MalformedInput(e.to_string())
}

/// Parse a body that must be a JSON object.
///
/// Derived struct deserializers also accept positional arrays, so the shape
/// is checked before any entity is decoded.
fn parse_object(body: &[u8]) -> Result<Value, ApiError> {
    let value: Value = serde_json::from_slice(body).map_err(malformed)?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(ApiError::MalformedInput("expected a JSON object".into()))
    }
}

/// Decode a JSON object body, mapping any failure to
/// [`ApiError::MalformedInput`].
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let value = parse_object(body)?;
    T::deserialize(value).map_err(malformed)
}

/// Body of `POST /levels`: one level, or a batch wrapped as `{"items": [...]}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LevelPayload {
    Single(Level),
    Batch(Vec<Level>),
}

impl LevelPayload {
    /// Decode a level body.
    ///
    /// Both shapes deserialize from the same object (unknown fields are
    /// ignored), so the order is fixed: the body is a single level if it
    /// decodes as one and names a building or carries a name. Otherwise it
    /// must be a non-empty `items` batch.
    pub fn decode(body: &[u8]) -> Result<Self, ApiError> {
        let hint = || ApiError::MalformedInput(LEVEL_PAYLOAD_HINT.into());
        let value = parse_object(body).map_err(|_| hint())?;

        if let Ok(level) = Level::deserialize(&value) {
            if !level.building_id.is_empty() || !level.name.is_empty() {
                return Ok(Self::Single(level));
            }
        }

        let items_are_objects = value
            .get("items")
            .and_then(Value::as_array)
            .is_some_and(|items| items.iter().all(Value::is_object));
        match LevelBatch::deserialize(&value) {
            Ok(batch) if items_are_objects && !batch.items.is_empty() => {
                Ok(Self::Batch(batch.items))
            }
            _ => Err(hint()),
        }
    }
}

/// Batch wrapper used for both requests and responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelBatch {
    #[serde(default)]
    pub items: Vec<Level>,
}

/// Query-string pairs in request order.
///
/// Repeated keys are kept rather than rejected; lookups take the first value.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// First value for `key`, or `""` when absent.
    pub fn first(&self, key: &str) -> &str {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }
}

/// Body of `GET /`.
#[derive(Clone, Debug, Serialize)]
pub struct SummaryResponse {
    pub message: String,
    pub counts: StoreCounts,
}

/// Body of `GET /health`.
#[derive(Clone, Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
        }
    }
}
