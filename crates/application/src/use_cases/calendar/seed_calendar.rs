use chrono::NaiveDate;
use livehub_domain::{CalendarSeedReport, CalendarSpan, DomainError, Granularity};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::CalendarRepository;

pub struct SeedCalendarUseCase {
    repo: Arc<dyn CalendarRepository>,
}

impl SeedCalendarUseCase {
    pub fn new(repo: Arc<dyn CalendarRepository>) -> Self {
        Self { repo }
    }

    /// Makes sure every day, hour and ten-minute bucket between `from` and
    /// `to` (inclusive) exists. Existing keys are left alone, and a table that
    /// already covers the start of the span is only topped up from its last day.
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<CalendarSeedReport, DomainError> {
        let span = CalendarSpan::new(from, to)?;
        let mut report = CalendarSeedReport::default();

        for granularity in Granularity::ALL {
            let coverage = self.repo.coverage(granularity).await?;
            let Some(pending) = span.uncovered(granularity, coverage.as_ref()) else {
                debug!(granularity = %granularity, "Calendar table already covers span");
                continue;
            };
            let keys: Vec<String> = pending.bucket_keys(granularity).collect();
            let inserted = self.repo.insert_missing(granularity, keys).await?;
            report.record(granularity, inserted);
        }

        info!(
            from = %from,
            to = %to,
            days = report.days,
            hours = report.hours,
            ten_minutes = report.ten_minutes,
            "Calendar buckets seeded"
        );

        Ok(report)
    }
}
