use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures talking to the payment provider.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("http request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider response deserialization: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0} is not configured")]
    MissingSecretKey(&'static str),

    #[error("invalid provider url: {0}")]
    InvalidUrl(String),

    #[error("invalid transaction reference: {0:?}")]
    InvalidReference(String),
}

#[derive(Error, Debug)]
pub enum PayhookError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl IntoResponse for PayhookError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self {
            PayhookError::Gateway(GatewayError::MissingSecretKey(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "MISSING_SECRET_KEY")
            }
            PayhookError::Gateway(GatewayError::InvalidReference(_)) => {
                (StatusCode::BAD_REQUEST, "INVALID_REFERENCE")
            }
            PayhookError::Gateway(_) => (StatusCode::INTERNAL_SERVER_ERROR, "GATEWAY_ERROR"),
        };

        let message = match &self {
            PayhookError::Gateway(e) => e.to_string(),
        };

        tracing::error!(
            error = ?self,
            error_code = error_code,
            "Request failed"
        );

        let body = ErrorResponse {
            status: "error".to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
