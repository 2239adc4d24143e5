use livehub_domain::{parse_timestamp, DomainError, NewVisitorLog};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RecordVisitRequest {
    pub ip: String,
    pub user_id: Option<i64>,
    pub live_room_id: i64,
    #[serde(default)]
    pub duration: i64,
    /// Epoch milliseconds or `YYYY-MM-DD HH:MM:SS`; defaults to now.
    pub created_at: Option<String>,
}

impl RecordVisitRequest {
    pub fn into_new_log(self) -> Result<NewVisitorLog, DomainError> {
        let created_at = self
            .created_at
            .as_deref()
            .map(parse_timestamp)
            .transpose()?;

        Ok(NewVisitorLog {
            ip: self.ip,
            user_id: self.user_id,
            live_room_id: self.live_room_id,
            duration: self.duration,
            created_at,
        })
    }
}
