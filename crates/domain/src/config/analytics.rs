use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalyticsConfig {
    /// First day (`YYYY-MM-DD`) covered by the calendar bucket tables.
    #[serde(default = "default_calendar_start")]
    pub calendar_start: String,

    /// How many days past today the calendar tables are kept populated.
    #[serde(default = "default_calendar_days_ahead")]
    pub calendar_days_ahead: u32,

    #[serde(default = "default_seed_interval_secs")]
    pub seed_interval_secs: u64,

    #[serde(default = "default_true")]
    pub seed_on_startup: bool,
}

impl AnalyticsConfig {
    pub fn calendar_start_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.calendar_start, "%Y-%m-%d").ok()
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            calendar_start: default_calendar_start(),
            calendar_days_ahead: default_calendar_days_ahead(),
            seed_interval_secs: default_seed_interval_secs(),
            seed_on_startup: true,
        }
    }
}

fn default_calendar_start() -> String {
    "2024-01-01".to_string()
}

fn default_calendar_days_ahead() -> u32 {
    31
}

fn default_seed_interval_secs() -> u64 {
    86_400
}

fn default_true() -> bool {
    true
}
