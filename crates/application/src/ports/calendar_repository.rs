use async_trait::async_trait;
use livehub_domain::{CalendarCoverage, DomainError, Granularity};

#[async_trait]
pub trait CalendarRepository: Send + Sync {
    /// Inserts the keys missing from the calendar table of `granularity` and
    /// returns how many rows were added.
    async fn insert_missing(
        &self,
        granularity: Granularity,
        keys: Vec<String>,
    ) -> Result<u64, DomainError>;

    async fn count(&self, granularity: Granularity) -> Result<u64, DomainError>;

    /// Key bounds and row count of the table, `None` while it is empty.
    async fn coverage(
        &self,
        granularity: Granularity,
    ) -> Result<Option<CalendarCoverage>, DomainError>;
}
