//! API error types with HTTP response mapping.

use application::UseCaseError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use order_store::StoreError;

/// Use-case failure wrapped for HTTP, mapped to a status by kind.
#[derive(Debug)]
pub struct ApiError(UseCaseError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = match &err {
            UseCaseError::Validation(_) => StatusCode::BAD_REQUEST,
            UseCaseError::Storage(StoreError::DuplicateKey(_)) => StatusCode::CONFLICT,
            UseCaseError::Storage(_) => {
                tracing::error!(error = %err, "order store failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            UseCaseError::Notification { order_id, .. } => {
                // The order is durable; only the downstream notification was
                // lost. Callers must not re-submit creation.
                tracing::error!(order_id = %order_id, error = %err, "order created but notification failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = serde_json::json!({ "error": err.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl From<UseCaseError> for ApiError {
    fn from(err: UseCaseError) -> Self {
        ApiError(err)
    }
}
