use crate::DomainError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// A single visit to a live room. Only ever soft-deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorLog {
    pub id: i64,
    pub ip: String,
    pub user_id: Option<i64>,
    pub live_room_id: i64,
    pub duration: i64,
    pub created_at: String,
    pub deleted_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVisitorLog {
    pub ip: String,
    pub user_id: Option<i64>,
    pub live_room_id: i64,
    pub duration: i64,
    /// Defaults to the current UTC time when absent.
    pub created_at: Option<NaiveDateTime>,
}

impl NewVisitorLog {
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_ip(&self.ip)?;
        if self.duration < 0 {
            return Err(DomainError::Validation(
                "duration cannot be negative".to_string(),
            ));
        }
        if self.live_room_id <= 0 {
            return Err(DomainError::Validation(
                "live_room_id must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Visitor ips are stored in canonical textual form, which never contains a
/// comma; the report aggregates rely on that.
pub fn validate_ip(ip: &str) -> Result<IpAddr, DomainError> {
    ip.parse::<IpAddr>()
        .map_err(|_| DomainError::Validation(format!("invalid ip address: {}", ip)))
}
