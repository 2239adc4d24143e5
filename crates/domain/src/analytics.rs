//! Visitor analytics report types.

use crate::DomainError;
use chrono::{Duration, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator used by every string aggregate in the reports.
pub const LIST_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Day,
    Hour,
    TenMinutes,
}

impl Granularity {
    pub const ALL: [Granularity; 3] = [
        Granularity::Day,
        Granularity::Hour,
        Granularity::TenMinutes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Hour => "hour",
            Granularity::TenMinutes => "ten_minutes",
        }
    }

    /// Width of one bucket.
    pub fn step(&self) -> Duration {
        match self {
            Granularity::Day => Duration::days(1),
            Granularity::Hour => Duration::hours(1),
            Granularity::TenMinutes => Duration::minutes(10),
        }
    }

    /// Floors a timestamp to the start of its bucket.
    pub fn floor(&self, ts: NaiveDateTime) -> NaiveDateTime {
        let date = ts.date();
        let (hour, minute) = match self {
            Granularity::Day => (0, 0),
            Granularity::Hour => (ts.hour(), 0),
            Granularity::TenMinutes => (ts.hour(), ts.minute() / 10 * 10),
        };
        date.and_hms_opt(hour, minute, 0).unwrap_or(ts)
    }
}

impl FromStr for Granularity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Granularity::Day),
            "hour" => Ok(Granularity::Hour),
            "ten_minutes" | "ten-minutes" | "minute_ten" => Ok(Granularity::TenMinutes),
            _ => Err(DomainError::Validation(format!("unknown granularity: {}", s))),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

crate::allowed_columns! {
    /// Sortable columns of a bucketed visitor report.
    pub enum ReportColumn {
        FormatDate => "format_date",
        SumDuration => "sum_duration",
        UniqueIpStr => "unique_ip_str",
        UniqueUserIdStr => "unique_user_id_str",
        IpStr => "ip_str",
        UserIdStr => "user_id_str",
        DurationStr => "duration_str",
    }
}

crate::allowed_columns! {
    /// Sortable columns of a per-user visit record.
    pub enum UserVisitColumn {
        FormatDate => "format_date",
        UserIdNums => "user_id_nums",
        SumDuration => "sum_duration",
        LiveRoomIdStr => "live_room_id_str",
        DurationStr => "duration_str",
    }
}

crate::allowed_columns! {
    /// Sortable columns of a per-ip visit record.
    pub enum IpVisitColumn {
        FormatDate => "format_date",
        IpNums => "ip_nums",
        SumDuration => "sum_duration",
        LiveRoomIdStr => "live_room_id_str",
        DurationStr => "duration_str",
    }
}

/// One bucket of a visitor report.
///
/// The `*_str` fields are `", "`-joined lists. `ip_str`, `user_id_str` and
/// `duration_str` hold one entry per visit in the same order; a guest visit
/// contributes an empty entry to `user_id_str`. A bucket with a single guest
/// visit therefore has `user_id_str == ""` while holding one visit, so read the
/// per-visit lists through [`ReportRow::visits`] rather than [`split_list`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub format_date: String,
    pub sum_duration: i64,
    pub unique_ip_str: String,
    pub unique_user_id_str: String,
    pub ip_str: String,
    pub user_id_str: String,
    pub duration_str: String,
}

impl ReportRow {
    pub fn unique_ips(&self) -> Vec<&str> {
        split_list(&self.unique_ip_str)
    }

    pub fn unique_user_ids(&self) -> Vec<&str> {
        split_list(&self.unique_user_id_str)
    }

    pub fn ips(&self) -> Vec<&str> {
        split_list(&self.ip_str)
    }

    /// One entry per visit, aligned with [`ips`](Self::ips); guests yield `""`.
    pub fn user_ids(&self) -> Vec<&str> {
        if self.is_empty() {
            return Vec::new();
        }
        self.user_id_str.split(LIST_SEPARATOR).collect()
    }

    /// `(ip, user_id, duration)` per visit.
    pub fn visits(&self) -> Vec<(&str, Option<&str>, i64)> {
        self.ips()
            .into_iter()
            .zip(self.user_ids())
            .zip(self.durations())
            .map(|((ip, user_id), duration)| {
                (ip, Some(user_id).filter(|u| !u.is_empty()), duration)
            })
            .collect()
    }

    pub fn durations(&self) -> Vec<i64> {
        split_list(&self.duration_str)
            .into_iter()
            .filter_map(|d| d.parse().ok())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.duration_str.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserVisitRecord {
    pub format_date: String,
    pub username: Option<String>,
    pub is_tourist: Option<bool>,
    pub user_id_nums: i64,
    pub user_id: i64,
    pub user_role_id: String,
    pub user_role_name: String,
    pub parent_user_id: String,
    pub parent_user_username: String,
    pub sum_duration: i64,
    pub live_room_id_str: String,
    pub duration_str: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpVisitRecord {
    pub format_date: String,
    pub ip: String,
    pub ip_nums: i64,
    pub sum_duration: i64,
    pub live_room_id_str: String,
    pub duration_str: String,
}

/// Splits a `", "`-joined aggregate; an empty aggregate yields no items.
pub fn split_list(joined: &str) -> Vec<&str> {
    if joined.is_empty() {
        return Vec::new();
    }
    joined.split(LIST_SEPARATOR).collect()
}
