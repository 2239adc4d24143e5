use livehub_domain::{DomainError, WalletRecord, WalletRecordInput};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::WalletRecordRepository;

pub struct UpdateWalletRecordUseCase {
    repo: Arc<dyn WalletRecordRepository>,
}

impl UpdateWalletRecordUseCase {
    pub fn new(repo: Arc<dyn WalletRecordRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        id: i64,
        input: WalletRecordInput,
    ) -> Result<WalletRecord, DomainError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::WalletRecordNotFound(id))?;

        input.validate()?;

        let updated = self.repo.update(id, input).await?;

        info!(wallet_record_id = id, "Wallet record updated successfully");

        Ok(updated)
    }
}
