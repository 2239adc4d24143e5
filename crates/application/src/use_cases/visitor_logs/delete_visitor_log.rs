use livehub_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::VisitorLogRepository;

pub struct DeleteVisitorLogUseCase {
    repo: Arc<dyn VisitorLogRepository>,
}

impl DeleteVisitorLogUseCase {
    pub fn new(repo: Arc<dyn VisitorLogRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.soft_delete(id).await? {
            return Err(DomainError::VisitorLogNotFound(id));
        }

        info!(visitor_log_id = id, "Visitor log soft-deleted");

        Ok(())
    }
}
