use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Sort field not allowed: {0}")]
    InvalidSortField(String),

    #[error("Sort direction must be 'asc' or 'desc', got: {0}")]
    InvalidSortDirection(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Live room not found: {0}")]
    LiveRoomNotFound(i64),

    #[error("Wallet record not found: {0}")]
    WalletRecordNotFound(i64),

    #[error("Visitor log not found: {0}")]
    VisitorLogNotFound(i64),

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Payment gateway is not configured")]
    PaymentGatewayUnavailable,

    #[error("Payment gateway error: {0}")]
    PaymentGateway(String),
}
