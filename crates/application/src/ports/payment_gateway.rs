use async_trait::async_trait;
use livehub_domain::{DomainError, TradeDetails};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecreateRequest {
    pub out_trade_no: String,
    pub total_amount: String,
    pub subject: String,
    pub body: Option<String>,
    pub product_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecreateResponse {
    pub qr_code: String,
}

/// Face-to-face payment provider. Signing and transport are the adapter's
/// concern.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn precreate(&self, request: &PrecreateRequest)
        -> Result<PrecreateResponse, DomainError>;

    async fn query_trade(&self, out_trade_no: &str) -> Result<TradeDetails, DomainError>;
}
