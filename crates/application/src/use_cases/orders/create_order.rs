use chrono::Utc;
use livehub_domain::{DomainError, NewOrder};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{OrderRepository, PaymentGateway, PrecreateRequest};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedOrder {
    pub qr_code: String,
    pub out_trade_no: String,
}

pub struct CreateOrderUseCase {
    repo: Arc<dyn OrderRepository>,
    gateway: Arc<dyn PaymentGateway>,
    product_code: String,
}

impl CreateOrderUseCase {
    pub fn new(
        repo: Arc<dyn OrderRepository>,
        gateway: Arc<dyn PaymentGateway>,
        product_code: String,
    ) -> Self {
        Self {
            repo,
            gateway,
            product_code,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        user_id: Option<i64>,
        total_amount: String,
        subject: String,
        body: Option<String>,
    ) -> Result<CreatedOrder, DomainError> {
        NewOrder::validate_amount(&total_amount)?;
        NewOrder::validate_subject(&subject)?;

        let request = PrecreateRequest {
            out_trade_no: generate_out_trade_no(Utc::now().timestamp_millis()),
            total_amount: total_amount.trim().to_string(),
            subject,
            body,
            product_code: self.product_code.clone(),
        };

        let response = self.gateway.precreate(&request).await?;

        let order = self
            .repo
            .create(NewOrder {
                user_id,
                out_trade_no: request.out_trade_no,
                total_amount: request.total_amount,
                subject: request.subject,
                body: request.body,
                product_code: request.product_code,
                qr_code: Some(response.qr_code.clone()),
            })
            .await?;

        info!(
            order_id = order.id,
            out_trade_no = %order.out_trade_no,
            total_amount = %order.total_amount,
            "Order created"
        );

        Ok(CreatedOrder {
            qr_code: response.qr_code,
            out_trade_no: order.out_trade_no,
        })
    }
}

/// `<epoch_ms>___<10 alphanumerics>`; only letters, digits and underscores,
/// well under the gateway's 64 character limit.
pub fn generate_out_trade_no(now_millis: i64) -> String {
    let suffix: String = std::iter::repeat_with(fastrand::alphanumeric)
        .take(10)
        .collect();
    format!("{}___{}", now_millis, suffix)
}
