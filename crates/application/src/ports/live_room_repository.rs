use async_trait::async_trait;
use livehub_domain::{DomainError, ListQuery, LiveRoom, LiveRoomColumn, LiveRoomFilter, LiveRoomInput};

#[async_trait]
pub trait LiveRoomRepository: Send + Sync {
    /// Returns the requested page and the total number of matching rows.
    async fn list(
        &self,
        query: &ListQuery<LiveRoomColumn, LiveRoomFilter>,
    ) -> Result<(Vec<LiveRoom>, u64), DomainError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<LiveRoom>, DomainError>;

    async fn create(&self, input: LiveRoomInput, key: String) -> Result<LiveRoom, DomainError>;

    async fn update(&self, id: i64, input: LiveRoomInput) -> Result<LiveRoom, DomainError>;

    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
