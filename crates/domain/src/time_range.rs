use crate::DomainError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Storage format of every timestamp column and calendar bucket key.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Inclusive `[start, end]` interval used by the analytics queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::Validation(format!(
                "range start {} is after range end {}",
                start.format(TIMESTAMP_FORMAT),
                end.format(TIMESTAMP_FORMAT)
            )));
        }
        Ok(Self { start, end })
    }

    /// Builds a range from the `rangTimeStart` / `rangTimeEnd` request values.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self, DomainError> {
        let start = start
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| DomainError::Validation("rangTimeStart is required".to_string()))?;
        let end = end
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| DomainError::Validation("rangTimeEnd is required".to_string()))?;

        Self::new(parse_timestamp(start)?, parse_timestamp(end)?)
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn start_key(&self) -> String {
        self.start.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn end_key(&self) -> String {
        self.end.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Accepts epoch milliseconds (UTC), `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD`.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, DomainError> {
    let raw = raw.trim();

    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        let millis: i64 = raw
            .parse()
            .map_err(|_| DomainError::Validation(format!("invalid epoch timestamp: {}", raw)))?;
        return DateTime::from_timestamp_millis(millis)
            .map(|dt| dt.naive_utc())
            .ok_or_else(|| DomainError::Validation(format!("epoch timestamp out of range: {}", raw)));
    }

    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT) {
        return Ok(ts);
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| DomainError::Validation(format!("malformed timestamp: {}", raw)))
}
