use async_trait::async_trait;
use livehub_domain::{
    DomainError, ListQuery, WalletRecord, WalletRecordColumn, WalletRecordFilter,
    WalletRecordInput,
};

#[async_trait]
pub trait WalletRecordRepository: Send + Sync {
    async fn list(
        &self,
        query: &ListQuery<WalletRecordColumn, WalletRecordFilter>,
    ) -> Result<(Vec<WalletRecord>, u64), DomainError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<WalletRecord>, DomainError>;

    async fn create(&self, input: WalletRecordInput) -> Result<WalletRecord, DomainError>;

    async fn update(&self, id: i64, input: WalletRecordInput)
        -> Result<WalletRecord, DomainError>;

    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
