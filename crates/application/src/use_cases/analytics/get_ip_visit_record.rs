use livehub_domain::{
    validate_ip, DomainError, IpVisitColumn, IpVisitRecord, SortOrder, TimeRange,
};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::VisitorAnalyticsRepository;

pub struct GetIpVisitRecordUseCase {
    repo: Arc<dyn VisitorAnalyticsRepository>,
}

impl GetIpVisitRecordUseCase {
    pub fn new(repo: Arc<dyn VisitorAnalyticsRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        ip: &str,
        range: TimeRange,
        order: Option<SortOrder<IpVisitColumn>>,
    ) -> Result<Vec<IpVisitRecord>, DomainError> {
        // Logs store the canonical form, so `::0001` must match `::1`.
        let ip = validate_ip(ip.trim())?.to_string();

        let rows = self.repo.ip_visit_record(&ip, range, order).await?;

        debug!(ip = %ip, days = rows.len(), "Ip visit record built");

        Ok(rows)
    }
}
