use livehub_domain::{DomainError, SortOrder, TimeRange, UserVisitColumn, UserVisitRecord};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::VisitorAnalyticsRepository;

pub struct GetUserVisitRecordUseCase {
    repo: Arc<dyn VisitorAnalyticsRepository>,
}

impl GetUserVisitRecordUseCase {
    pub fn new(repo: Arc<dyn VisitorAnalyticsRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        user_id: i64,
        range: TimeRange,
        order: Option<SortOrder<UserVisitColumn>>,
    ) -> Result<Vec<UserVisitRecord>, DomainError> {
        if user_id <= 0 {
            return Err(DomainError::Validation(format!(
                "invalid user id: {}",
                user_id
            )));
        }

        let rows = self.repo.user_visit_record(user_id, range, order).await?;

        debug!(user_id, days = rows.len(), "User visit record built");

        Ok(rows)
    }
}
