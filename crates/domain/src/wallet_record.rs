use crate::DomainError;
use serde::{Deserialize, Serialize};

/// Movement on a user's wallet. `amount` is in the smallest currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletRecord {
    pub id: i64,
    pub user_id: i64,
    pub order_id: Option<i64>,
    pub record_type: i64,
    pub name: Option<String>,
    pub amount: i64,
    pub remark: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletRecordInput {
    pub user_id: Option<i64>,
    pub order_id: Option<i64>,
    pub record_type: Option<i64>,
    pub name: Option<String>,
    pub amount: Option<i64>,
    pub remark: Option<String>,
}

impl WalletRecordInput {
    pub fn validate_for_create(&self) -> Result<(), DomainError> {
        if self.user_id.is_none() {
            return Err(DomainError::Validation("user_id is required".to_string()));
        }
        if self.amount.is_none() {
            return Err(DomainError::Validation("amount is required".to_string()));
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(remark) = &self.remark {
            if remark.chars().count() > 500 {
                return Err(DomainError::Validation(
                    "Remark cannot exceed 500 characters".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletRecordFilter {
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub order_id: Option<i64>,
    pub record_type: Option<i64>,
    pub name: Option<String>,
}

crate::allowed_columns! {
    pub enum WalletRecordColumn {
        Id => "id",
        UserId => "user_id",
        OrderId => "order_id",
        Amount => "amount",
        CreatedAt => "created_at",
        UpdatedAt => "updated_at",
    }
}
