use livehub_domain::{
    DomainError, ListQuery, LiveRoom, LiveRoomColumn, LiveRoomFilter, Page, SortDirection,
    SortOrder,
};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::LiveRoomRepository;

pub struct GetLiveRoomsUseCase {
    repo: Arc<dyn LiveRoomRepository>,
}

impl GetLiveRoomsUseCase {
    pub fn new(repo: Arc<dyn LiveRoomRepository>) -> Self {
        Self { repo }
    }

    /// Lists rooms ordered by id ascending unless the caller picked an order.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        mut query: ListQuery<LiveRoomColumn, LiveRoomFilter>,
    ) -> Result<Page<LiveRoom>, DomainError> {
        if query.order.is_none() {
            query.order = Some(SortOrder::new(LiveRoomColumn::Id, SortDirection::Asc));
        }

        let (rows, total) = self.repo.list(&query).await?;
        Ok(Page::new(rows, total, query.page))
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<LiveRoom, DomainError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::LiveRoomNotFound(id))
    }
}
