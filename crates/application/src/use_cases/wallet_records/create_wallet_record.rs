use livehub_domain::{DomainError, WalletRecord, WalletRecordInput};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::WalletRecordRepository;

pub struct CreateWalletRecordUseCase {
    repo: Arc<dyn WalletRecordRepository>,
}

impl CreateWalletRecordUseCase {
    pub fn new(repo: Arc<dyn WalletRecordRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, input: WalletRecordInput) -> Result<WalletRecord, DomainError> {
        input.validate_for_create()?;

        let record = self.repo.create(input).await?;

        info!(
            wallet_record_id = record.id,
            user_id = record.user_id,
            amount = record.amount,
            "Wallet record created successfully"
        );

        Ok(record)
    }
}
