//! HTTP error mapping.
//!
//! Validation failures become `422` with one entry per field; inference
//! failures become an opaque `500` and are logged server-side.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::domain::error::ValidationErrors;
use crate::error::InferenceError;

/// One entry of a `422` response body.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub loc: Vec<&'static str>,
    pub msg: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Errors a handler can return.
#[derive(Debug)]
pub enum ApiError {
    Validation(ValidationErrors),
    Inference(InferenceError),
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<InferenceError> for ApiError {
    fn from(error: InferenceError) -> Self {
        Self::Inference(error)
    }
}

/// Field-level diagnostics for a rejected payload.
pub fn validation_details(errors: &ValidationErrors) -> Vec<ErrorDetail> {
    errors
        .iter()
        .map(|error| {
            let mut loc = vec!["body"];
            loc.extend(error.field());
            ErrorDetail {
                loc,
                msg: error.kind().message(),
                kind: error.kind().code(),
            }
        })
        .collect()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": validation_details(&errors) })),
            )
                .into_response(),
            Self::Inference(error) => {
                tracing::error!(error = %error, "Inference failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "Internal Server Error" })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{FieldError, FieldErrorKind};

    #[test]
    fn details_prefix_body_location() {
        let errors = ValidationErrors::from_errors(vec![
            FieldError::new("tenure", FieldErrorKind::Missing),
            FieldError::body(FieldErrorKind::JsonInvalid),
        ])
        .unwrap();

        let details = serde_json::to_value(validation_details(&errors)).unwrap();
        assert_eq!(
            details,
            json!([
                { "loc": ["body", "tenure"], "msg": "Field required", "type": "missing" },
                { "loc": ["body"], "msg": "JSON decode error", "type": "json_invalid" }
            ])
        );
    }

    #[test]
    fn status_codes() {
        let validation = ApiError::from(ValidationErrors::body(FieldErrorKind::ObjectType));
        assert_eq!(
            validation.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        let inference = ApiError::from(InferenceError::Backend("down".into()));
        assert_eq!(
            inference.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
