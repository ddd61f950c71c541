//! Request body extraction that reports rejections in the error envelope.

use std::collections::BTreeMap;

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::server::error::{validation::ValidationError, AppError};

/// Key under which failures that concern the body as a whole are reported.
pub const BODY_FIELD: &str = "_schema";

const DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// JSON request body extractor.
///
/// Behaves like `axum::Json` but turns every rejection into a 400 `ValidationError`.
/// A wrong-typed field is reported under its own name, anything else under `_schema`.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidationError::from)?;

        Ok(Self(value))
    }
}

impl From<JsonRejection> for ValidationError {
    fn from(rejection: JsonRejection) -> Self {
        let (field, message) = match rejection {
            JsonRejection::JsonDataError(err) => split_field(&err.body_text()),
            other => (BODY_FIELD.to_string(), other.body_text()),
        };

        Self {
            fields: BTreeMap::from([(field, vec![message])]),
        }
    }
}

/// Splits a deserialization message into the field path and the serde message.
fn split_field(text: &str) -> (String, String) {
    let detail = text.strip_prefix(DATA_ERROR_PREFIX).unwrap_or(text);
    let detail = detail
        .rsplit_once(" at line ")
        .map_or(detail, |(message, _)| message);

    match detail.split_once(": ") {
        Some((path, message)) if is_field_path(path) => (path.to_string(), message.to_string()),
        _ => (BODY_FIELD.to_string(), detail.to_string()),
    }
}

fn is_field_path(path: &str) -> bool {
    !path.is_empty()
        && path
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '[' | ']'))
}
