use chrono::{Days, NaiveDate, Utc};
use livehub_application::use_cases::SeedCalendarUseCase;
use livehub_domain::{CalendarSeedReport, DomainError};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const DEFAULT_INTERVAL_SECS: u64 = 86_400;

/// Keeps the calendar bucket tables populated from a fixed start date up to a
/// rolling horizon past today.
pub struct CalendarSeedJob {
    seed: Arc<SeedCalendarUseCase>,
    calendar_start: NaiveDate,
    days_ahead: u32,
    interval_secs: u64,
    run_on_startup: bool,
    shutdown: CancellationToken,
}

impl CalendarSeedJob {
    pub fn new(seed: Arc<SeedCalendarUseCase>, calendar_start: NaiveDate, days_ahead: u32) -> Self {
        Self {
            seed,
            calendar_start,
            days_ahead,
            interval_secs: DEFAULT_INTERVAL_SECS,
            run_on_startup: true,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs.max(1);
        self
    }

    pub fn with_run_on_startup(mut self, run_on_startup: bool) -> Self {
        self.run_on_startup = run_on_startup;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// `(from, to)` span to seed when the current date is `today`.
    pub fn horizon(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let to = today
            .checked_add_days(Days::new(self.days_ahead as u64))
            .unwrap_or(today);
        (self.calendar_start.min(to), to)
    }

    pub async fn run_once(&self, today: NaiveDate) -> Result<CalendarSeedReport, DomainError> {
        let (from, to) = self.horizon(today);
        self.seed.execute(from, to).await
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            calendar_start = %self.calendar_start,
            days_ahead = self.days_ahead,
            run_on_startup = self.run_on_startup,
            "Starting calendar seed job"
        );

        let period = Duration::from_secs(self.interval_secs);
        let first = if self.run_on_startup {
            Instant::now()
        } else {
            Instant::now() + period
        };
        let mut interval = interval_at(first, period);

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("CalendarSeedJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    match self.run_once(Utc::now().date_naive()).await {
                        Ok(report) => {
                            if report.total() > 0 {
                                info!(
                                    days = report.days,
                                    hours = report.hours,
                                    ten_minutes = report.ten_minutes,
                                    "Calendar seed cycle completed"
                                );
                            }
                        }
                        Err(e) => {
                            error!(error = %e, "Calendar seed cycle failed");
                        }
                    }
                }
            }
        }
    }
}
