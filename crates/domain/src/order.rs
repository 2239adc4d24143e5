use crate::DomainError;
use serde::{Deserialize, Serialize};

pub const TRADE_WAIT_BUYER_PAY: &str = "WAIT_BUYER_PAY";
pub const TRADE_SUCCESS: &str = "TRADE_SUCCESS";

/// A payment order created through the payment gateway's pre-create call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub user_id: Option<i64>,
    pub out_trade_no: String,
    pub total_amount: String,
    pub subject: String,
    pub body: Option<String>,
    pub product_code: String,
    pub qr_code: Option<String>,
    pub trade: TradeDetails,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub user_id: Option<i64>,
    pub out_trade_no: String,
    pub total_amount: String,
    pub subject: String,
    pub body: Option<String>,
    pub product_code: String,
    pub qr_code: Option<String>,
}

impl NewOrder {
    pub fn validate_amount(amount: &str) -> Result<(), DomainError> {
        let value: f64 = amount
            .trim()
            .parse()
            .map_err(|_| DomainError::Validation(format!("invalid total_amount: {}", amount)))?;
        if !(0.01..=100_000_000.0).contains(&value) {
            return Err(DomainError::Validation(
                "total_amount must be within [0.01, 100000000]".to_string(),
            ));
        }
        if amount.split('.').nth(1).is_some_and(|frac| frac.len() > 2) {
            return Err(DomainError::Validation(
                "total_amount allows at most two decimal places".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_subject(subject: &str) -> Result<(), DomainError> {
        if subject.trim().is_empty() {
            return Err(DomainError::Validation("subject cannot be blank".to_string()));
        }
        if subject.contains(['/', '=', '&']) {
            return Err(DomainError::Validation(
                "subject cannot contain '/', '=' or '&'".to_string(),
            ));
        }
        Ok(())
    }
}

/// Trade state reported by the gateway's trade query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeDetails {
    pub trade_no: Option<String>,
    pub trade_status: Option<String>,
    pub buyer_logon_id: Option<String>,
    pub buyer_pay_amount: Option<String>,
    pub buyer_user_id: Option<String>,
    pub invoice_amount: Option<String>,
    pub point_amount: Option<String>,
    pub receipt_amount: Option<String>,
    pub send_pay_date: Option<String>,
}

/// Status returned to the buyer-facing client while it polls an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayStatus {
    #[serde(rename = "error")]
    Error,
    #[serde(rename = "WAIT_BUYER_PAY")]
    WaitBuyerPay,
    #[serde(rename = "TRADE_SUCCESS")]
    TradeSuccess,
}

impl PayStatus {
    pub fn from_trade_status(status: Option<&str>) -> Self {
        match status {
            Some(TRADE_WAIT_BUYER_PAY) => PayStatus::WaitBuyerPay,
            Some(TRADE_SUCCESS) => PayStatus::TradeSuccess,
            _ => PayStatus::Error,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub trade_status: Option<String>,
}

crate::allowed_columns! {
    pub enum OrderColumn {
        Id => "id",
        TotalAmount => "total_amount",
        TradeStatus => "trade_status",
        CreatedAt => "created_at",
        UpdatedAt => "updated_at",
    }
}
