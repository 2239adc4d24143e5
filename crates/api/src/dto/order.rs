use livehub_domain::{OrderFilter, PayStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub user_id: Option<i64>,
    pub total_amount: String,
    pub subject: String,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderFilterParams {
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub trade_status: Option<String>,
}

impl From<OrderFilterParams> for OrderFilter {
    fn from(p: OrderFilterParams) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            trade_status: p.trade_status,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PayStatusQuery {
    pub out_trade_no: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PayStatusResponse {
    pub out_trade_no: String,
    pub status: PayStatus,
}
