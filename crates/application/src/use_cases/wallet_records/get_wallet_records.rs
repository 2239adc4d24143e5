use livehub_domain::{
    DomainError, ListQuery, Page, WalletRecord, WalletRecordColumn, WalletRecordFilter,
};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::WalletRecordRepository;

pub struct GetWalletRecordsUseCase {
    repo: Arc<dyn WalletRecordRepository>,
}

impl GetWalletRecordsUseCase {
    pub fn new(repo: Arc<dyn WalletRecordRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        query: ListQuery<WalletRecordColumn, WalletRecordFilter>,
    ) -> Result<Page<WalletRecord>, DomainError> {
        let (rows, total) = self.repo.list(&query).await?;
        Ok(Page::new(rows, total, query.page))
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<WalletRecord, DomainError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::WalletRecordNotFound(id))
    }
}
