use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Upstream(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Bokun connection error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Unexpected Bokun payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Request signing failed: {0}")]
    Signing(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Upstream(msg) => {
                warn!("Upstream call failed: {}", msg);
                StatusCode::BAD_REQUEST
            }
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Transport(e) => {
                error!("Transport error: {:?}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Decode(e) => {
                error!("Decode error: {:?}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Signing(msg) => {
                error!("Internal error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "success": false,
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
