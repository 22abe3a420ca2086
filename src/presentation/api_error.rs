// Mapping of the error taxonomy onto HTTP responses
use crate::domain::error::ErrorKind;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

impl ErrorKind {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorKind::InvalidRequest(_) | ErrorKind::UnsupportedLocation { .. } => {
                StatusCode::BAD_REQUEST
            }
            ErrorKind::LocationNotFound { .. } => StatusCode::NOT_FOUND,
            ErrorKind::SourceUnavailable | ErrorKind::AllSourcesUnavailable => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ErrorKind {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
