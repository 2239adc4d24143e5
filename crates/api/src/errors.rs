use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use livehub_domain::DomainError;
use serde_json::json;
use tracing::error;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::Validation(_)
            | DomainError::InvalidSortField(_)
            | DomainError::InvalidSortDirection(_) => {
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }

            DomainError::LiveRoomNotFound(_)
            | DomainError::WalletRecordNotFound(_)
            | DomainError::VisitorLogNotFound(_)
            | DomainError::OrderNotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),

            DomainError::PaymentGatewayUnavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, self.0.to_string())
            }
            DomainError::PaymentGateway(_) => (StatusCode::BAD_GATEWAY, self.0.to_string()),

            DomainError::DatabaseError(_) => {
                error!(error = %self.0, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
