use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::types::FieldErrors;
use crate::view::notification::Notification;

/// Profiles service error variants.
#[derive(Debug, thiserror::Error)]
pub enum ProfilesServiceError {
    #[error("form must be a JSON object")]
    MalformedForm,
    #[error("validation failed")]
    Validation(FieldErrors),
    /// Any failure reported by the persistence boundary, kept unchanged.
    #[error("persistence boundary failure")]
    Store(#[from] anyhow::Error),
}

impl ProfilesServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedForm => "MALFORMED_FORM",
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::Store(_) => "SUBMISSION_FAILED",
        }
    }
}

impl IntoResponse for ProfilesServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MalformedForm => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = match &self {
            Self::Validation(fields) => serde_json::json!({
                "kind": self.kind(),
                "message": self.to_string(),
                "fields": fields,
            }),
            Self::Store(e) => {
                let detail = format!("{e:#}");
                tracing::error!(error = %detail, kind = self.kind(), "store error");
                // Callers only ever see the generic notification.
                let notification = Notification::submission_failed();
                serde_json::json!({
                    "kind": self.kind(),
                    "message": notification.description,
                    "notification": notification,
                })
            }
            Self::MalformedForm => serde_json::json!({
                "kind": self.kind(),
                "message": self.to_string(),
            }),
        };
        (status, axum::Json(body)).into_response()
    }
}
