use livehub_domain::{WalletRecord, WalletRecordFilter, WalletRecordInput};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct WalletRecordResponse {
    pub id: i64,
    pub user_id: i64,
    pub order_id: Option<i64>,
    #[serde(rename = "type")]
    pub record_type: i64,
    pub name: Option<String>,
    pub amount: i64,
    pub remark: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl WalletRecordResponse {
    pub fn from_record(r: WalletRecord) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            order_id: r.order_id,
            record_type: r.record_type,
            name: r.name,
            amount: r.amount,
            remark: r.remark,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WalletRecordFilterParams {
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub order_id: Option<i64>,
    #[serde(rename = "type")]
    pub record_type: Option<i64>,
    pub name: Option<String>,
}

impl From<WalletRecordFilterParams> for WalletRecordFilter {
    fn from(p: WalletRecordFilterParams) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            order_id: p.order_id,
            record_type: p.record_type,
            name: p.name,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WalletRecordRequest {
    pub user_id: Option<i64>,
    pub order_id: Option<i64>,
    #[serde(rename = "type")]
    pub record_type: Option<i64>,
    pub name: Option<String>,
    pub amount: Option<i64>,
    pub remark: Option<String>,
}

impl From<WalletRecordRequest> for WalletRecordInput {
    fn from(r: WalletRecordRequest) -> Self {
        Self {
            user_id: r.user_id,
            order_id: r.order_id,
            record_type: r.record_type,
            name: r.name,
            amount: r.amount,
            remark: r.remark,
        }
    }
}
