use livehub_domain::{validate_ip, DomainError, NewVisitorLog, VisitorLog};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{LiveRoomRepository, VisitorLogRepository};

pub struct RecordVisitUseCase {
    repo: Arc<dyn VisitorLogRepository>,
    live_room_repo: Arc<dyn LiveRoomRepository>,
}

impl RecordVisitUseCase {
    pub fn new(
        repo: Arc<dyn VisitorLogRepository>,
        live_room_repo: Arc<dyn LiveRoomRepository>,
    ) -> Self {
        Self {
            repo,
            live_room_repo,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, mut log: NewVisitorLog) -> Result<VisitorLog, DomainError> {
        log.ip = log.ip.trim().to_string();
        log.validate()?;
        log.ip = validate_ip(&log.ip)?.to_string();

        self.live_room_repo
            .get_by_id(log.live_room_id)
            .await?
            .ok_or(DomainError::LiveRoomNotFound(log.live_room_id))?;

        let created = self.repo.create(log).await?;

        info!(
            visitor_log_id = created.id,
            live_room_id = created.live_room_id,
            ip = %created.ip,
            duration = created.duration,
            "Visit recorded"
        );

        Ok(created)
    }
}
