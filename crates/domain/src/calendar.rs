use crate::{DomainError, Granularity, TIMESTAMP_FORMAT};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Inclusive span of calendar days whose buckets should exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarSpan {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl CalendarSpan {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, DomainError> {
        if from > to {
            return Err(DomainError::Validation(format!(
                "calendar span start {} is after end {}",
                from, to
            )));
        }
        Ok(Self { from, to })
    }

    /// The part of this span a table with `coverage` still lacks. A gap-free
    /// table that starts no later than `from` is resumed from its last day;
    /// anything else gets the full span.
    pub fn uncovered(
        &self,
        granularity: Granularity,
        coverage: Option<&CalendarCoverage>,
    ) -> Option<CalendarSpan> {
        let Some(coverage) = coverage else {
            return Some(*self);
        };
        let (Some(first), Some(last)) = (coverage.first_key(), coverage.last_key()) else {
            return Some(*self);
        };
        let starts_in_time = self
            .from
            .and_hms_opt(0, 0, 0)
            .is_some_and(|start| first <= start);
        if !starts_in_time || !coverage.is_contiguous(granularity) {
            return Some(*self);
        }

        let from = self.from.max(last.date());
        (from <= self.to).then_some(CalendarSpan { from, to: self.to })
    }

    /// Every bucket key of `granularity` from `from 00:00:00` through the last
    /// bucket of `to`.
    pub fn bucket_keys(&self, granularity: Granularity) -> BucketKeys {
        BucketKeys {
            next: self.from.and_hms_opt(0, 0, 0),
            last: self.to.and_hms_opt(23, 59, 59),
            granularity,
        }
    }
}

/// Smallest key, largest key and row count of one calendar table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCoverage {
    pub first: String,
    pub last: String,
    pub count: u64,
}

impl CalendarCoverage {
    fn first_key(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.first, TIMESTAMP_FORMAT).ok()
    }

    fn last_key(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.last, TIMESTAMP_FORMAT).ok()
    }

    /// True when every bucket between `first` and `last` is present.
    pub fn is_contiguous(&self, granularity: Granularity) -> bool {
        let (Some(first), Some(last)) = (self.first_key(), self.last_key()) else {
            return false;
        };
        let step = granularity.step().num_seconds();
        let spread = (last - first).num_seconds();
        spread >= 0 && spread % step == 0 && (spread / step + 1) as u64 == self.count
    }
}

pub struct BucketKeys {
    next: Option<NaiveDateTime>,
    last: Option<NaiveDateTime>,
    granularity: Granularity,
}

impl Iterator for BucketKeys {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let current = self.next?;
        if current > self.last? {
            return None;
        }
        self.next = current.checked_add_signed(self.granularity.step());
        Some(current.format(TIMESTAMP_FORMAT).to_string())
    }
}

/// Rows inserted per calendar table by a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CalendarSeedReport {
    pub days: u64,
    pub hours: u64,
    pub ten_minutes: u64,
}

impl CalendarSeedReport {
    pub fn record(&mut self, granularity: Granularity, inserted: u64) {
        match granularity {
            Granularity::Day => self.days += inserted,
            Granularity::Hour => self.hours += inserted,
            Granularity::TenMinutes => self.ten_minutes += inserted,
        }
    }

    pub fn total(&self) -> u64 {
        self.days + self.hours + self.ten_minutes
    }
}
