use chrono::Utc;
use livehub_domain::{DomainError, LiveRoom, LiveRoomInput};
use sha2::{Digest, Sha256};
use std::fmt::Write;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::LiveRoomRepository;

const STREAM_KEY_LEN: usize = 32;

pub struct CreateLiveRoomUseCase {
    repo: Arc<dyn LiveRoomRepository>,
}

impl CreateLiveRoomUseCase {
    pub fn new(repo: Arc<dyn LiveRoomRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, input: LiveRoomInput) -> Result<LiveRoom, DomainError> {
        if input.name.is_none() {
            return Err(DomainError::Validation(
                "Live room name is required".to_string(),
            ));
        }
        input.validate()?;

        let key = generate_stream_key(Utc::now().timestamp_millis());
        let room = self.repo.create(input, key).await?;

        info!(
            live_room_id = room.id,
            name = ?room.name,
            "Live room created successfully"
        );

        Ok(room)
    }
}

/// Push authentication key: hex digest of the creation time plus a random
/// suffix, truncated to 32 characters.
pub fn generate_stream_key(now_millis: i64) -> String {
    let suffix: String = std::iter::repeat_with(fastrand::alphanumeric)
        .take(6)
        .collect();
    let digest = Sha256::digest(format!("{}___{}", now_millis, suffix).as_bytes());

    let mut key = String::with_capacity(STREAM_KEY_LEN);
    for byte in digest.iter().take(STREAM_KEY_LEN / 2) {
        let _ = write!(key, "{:02x}", byte);
    }
    key
}
