use livehub_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::WalletRecordRepository;

pub struct DeleteWalletRecordUseCase {
    repo: Arc<dyn WalletRecordRepository>,
}

impl DeleteWalletRecordUseCase {
    pub fn new(repo: Arc<dyn WalletRecordRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<(), DomainError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::WalletRecordNotFound(id))?;

        self.repo.delete(id).await?;

        info!(wallet_record_id = id, "Wallet record deleted successfully");

        Ok(())
    }
}
