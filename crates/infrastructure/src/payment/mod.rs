use async_trait::async_trait;
use livehub_application::ports::{PaymentGateway, PrecreateRequest, PrecreateResponse};
use livehub_domain::{DomainError, TradeDetails};
use tracing::warn;

/// Gateway used when no payment provider is wired in. Every call fails with
/// [`DomainError::PaymentGatewayUnavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredPaymentGateway;

#[async_trait]
impl PaymentGateway for UnconfiguredPaymentGateway {
    async fn precreate(
        &self,
        request: &PrecreateRequest,
    ) -> Result<PrecreateResponse, DomainError> {
        warn!(out_trade_no = %request.out_trade_no, "Precreate refused: no payment gateway");
        Err(DomainError::PaymentGatewayUnavailable)
    }

    async fn query_trade(&self, out_trade_no: &str) -> Result<TradeDetails, DomainError> {
        warn!(out_trade_no = %out_trade_no, "Trade query refused: no payment gateway");
        Err(DomainError::PaymentGatewayUnavailable)
    }
}
