use livehub_domain::{DomainError, PayStatus};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::{OrderRepository, PaymentGateway};

pub struct GetPayStatusUseCase {
    repo: Arc<dyn OrderRepository>,
    gateway: Arc<dyn PaymentGateway>,
}

impl GetPayStatusUseCase {
    pub fn new(repo: Arc<dyn OrderRepository>, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { repo, gateway }
    }

    /// Queries the gateway, stores the trade details on the order and maps
    /// the trade status. Unknown orders and rejected queries yield
    /// [`PayStatus::Error`].
    #[instrument(skip(self))]
    pub async fn execute(&self, out_trade_no: &str) -> Result<PayStatus, DomainError> {
        if self.repo.get_by_out_trade_no(out_trade_no).await?.is_none() {
            warn!(out_trade_no = %out_trade_no, "Pay status requested for unknown order");
            return Ok(PayStatus::Error);
        }

        let trade = match self.gateway.query_trade(out_trade_no).await {
            Ok(trade) => trade,
            Err(DomainError::PaymentGateway(reason)) => {
                warn!(out_trade_no = %out_trade_no, reason = %reason, "Trade query rejected");
                return Ok(PayStatus::Error);
            }
            Err(e) => return Err(e),
        };

        let order = self.repo.update_trade(out_trade_no, &trade).await?;
        let status = PayStatus::from_trade_status(order.trade.trade_status.as_deref());

        info!(
            out_trade_no = %out_trade_no,
            status = ?status,
            "Trade status refreshed"
        );

        Ok(status)
    }
}
