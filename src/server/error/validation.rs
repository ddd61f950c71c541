use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Field-level validation failures collected from a request body.
///
/// Keys are field names, values are every message raised for that field in the
/// order the checks ran.
#[derive(Error, Debug, Default, PartialEq, Eq)]
#[error("Validation failed")]
pub struct ValidationError {
    pub fields: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    /// Returns the messages raised for `field`, if any.
    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }
}

/// Results in a 400 Bad Request with the per-field messages under `details`.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
                details: Some(self.fields),
            }),
        )
            .into_response()
    }
}
