use async_trait::async_trait;
use livehub_domain::{DomainError, NewVisitorLog, VisitorLog};

#[async_trait]
pub trait VisitorLogRepository: Send + Sync {
    async fn create(&self, log: NewVisitorLog) -> Result<VisitorLog, DomainError>;

    /// Soft-deleted rows are returned too, with `deleted_at` set.
    async fn get_by_id(&self, id: i64) -> Result<Option<VisitorLog>, DomainError>;

    /// Marks a live row as deleted. Returns `false` if no live row matched.
    async fn soft_delete(&self, id: i64) -> Result<bool, DomainError>;
}
