//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::encoder::EncodeError;
use crate::engine::RecommendError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Client error: the request named a symptom outside the vocabulary.
    #[error("unknown symptom: {0:?}")]
    UnknownSymptom(String),
    /// Server-side data error: model and label map disagree.
    #[error("label map does not cover class id {0}")]
    LabelMapMismatch(u32),
    /// Server-side data error: a mandatory reference row is missing.
    #[error("reference data incomplete: {0}")]
    DataIncomplete(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RecommendError> for ApiError {
    fn from(err: RecommendError) -> Self {
        match err {
            RecommendError::Encode(EncodeError::UnknownSymptom(name)) => {
                ApiError::UnknownSymptom(name)
            }
            RecommendError::UnknownClassId(id) => ApiError::LabelMapMismatch(id),
            RecommendError::MissingMedications(disease) => {
                ApiError::DataIncomplete(format!("no medications recorded for {disease:?}"))
            }
            RecommendError::Classifier(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::UnknownSymptom(name) => (
                StatusCode::BAD_REQUEST,
                "UNKNOWN_SYMPTOM",
                format!("unknown symptom: {name:?}"),
            ),
            ApiError::LabelMapMismatch(id) => {
                tracing::error!(class_id = *id, "label map does not cover classifier output");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LABEL_MAP_MISMATCH",
                    "classifier output has no disease label".to_string(),
                )
            }
            ApiError::DataIncomplete(detail) => {
                tracing::error!(detail, "reference data incomplete");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATA_INCOMPLETE",
                    detail.clone(),
                )
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "an internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };
        (status, Json(body)).into_response()
    }
}
