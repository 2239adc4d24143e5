use livehub_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::LiveRoomRepository;

pub struct DeleteLiveRoomUseCase {
    repo: Arc<dyn LiveRoomRepository>,
}

impl DeleteLiveRoomUseCase {
    pub fn new(repo: Arc<dyn LiveRoomRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<(), DomainError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::LiveRoomNotFound(id))?;

        self.repo.delete(id).await?;

        info!(live_room_id = id, "Live room deleted successfully");

        Ok(())
    }
}
