use async_trait::async_trait;
use livehub_domain::{
    DomainError, Granularity, IpVisitColumn, IpVisitRecord, ReportColumn, ReportRow, SortOrder,
    TimeRange, UserVisitColumn, UserVisitRecord,
};

/// Read side of the visitor log: bucketed aggregates joined against the
/// calendar tables, one row per bucket in the range.
#[async_trait]
pub trait VisitorAnalyticsRepository: Send + Sync {
    async fn report(
        &self,
        granularity: Granularity,
        range: TimeRange,
        order: Option<SortOrder<ReportColumn>>,
    ) -> Result<Vec<ReportRow>, DomainError>;

    async fn user_visit_record(
        &self,
        user_id: i64,
        range: TimeRange,
        order: Option<SortOrder<UserVisitColumn>>,
    ) -> Result<Vec<UserVisitRecord>, DomainError>;

    async fn ip_visit_record(
        &self,
        ip: &str,
        range: TimeRange,
        order: Option<SortOrder<IpVisitColumn>>,
    ) -> Result<Vec<IpVisitRecord>, DomainError>;
}
