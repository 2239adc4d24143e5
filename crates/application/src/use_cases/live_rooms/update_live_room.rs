use livehub_domain::{DomainError, LiveRoom, LiveRoomInput};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::LiveRoomRepository;

pub struct UpdateLiveRoomUseCase {
    repo: Arc<dyn LiveRoomRepository>,
}

impl UpdateLiveRoomUseCase {
    pub fn new(repo: Arc<dyn LiveRoomRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64, input: LiveRoomInput) -> Result<LiveRoom, DomainError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::LiveRoomNotFound(id))?;

        input.validate()?;

        let updated = self.repo.update(id, input).await?;

        info!(
            live_room_id = id,
            status = updated.status,
            is_show = updated.is_show,
            "Live room updated successfully"
        );

        Ok(updated)
    }
}
