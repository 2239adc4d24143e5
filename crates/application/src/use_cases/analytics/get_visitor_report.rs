use livehub_domain::{DomainError, Granularity, ReportColumn, ReportRow, SortOrder, TimeRange};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::VisitorAnalyticsRepository;

pub struct GetVisitorReportUseCase {
    repo: Arc<dyn VisitorAnalyticsRepository>,
}

impl GetVisitorReportUseCase {
    pub fn new(repo: Arc<dyn VisitorAnalyticsRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        granularity: Granularity,
        range: TimeRange,
        order: Option<SortOrder<ReportColumn>>,
    ) -> Result<Vec<ReportRow>, DomainError> {
        let rows = self.repo.report(granularity, range, order).await?;

        debug!(
            granularity = %granularity,
            buckets = rows.len(),
            "Visitor report built"
        );

        Ok(rows)
    }
}
