use crate::DomainError;
use serde::{Deserialize, Serialize};

/// Pull (playback) endpoints of a room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullUrls {
    pub rtmp_url: Option<String>,
    pub flv_url: Option<String>,
    pub hls_url: Option<String>,
    pub webrtc_url: Option<String>,
}

/// Ingest endpoints handed to the streamer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushUrls {
    pub push_rtmp_url: Option<String>,
    pub push_obs_server: Option<String>,
    pub push_obs_stream_key: Option<String>,
    pub push_webrtc_url: Option<String>,
    pub push_srt_url: Option<String>,
}

/// Restream targets on third-party platforms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardUrls {
    pub forward_bilibili_url: Option<String>,
    pub forward_douyin_url: Option<String>,
    pub forward_douyu_url: Option<String>,
    pub forward_huya_url: Option<String>,
    pub forward_kuaishou_url: Option<String>,
    pub forward_xiaohongshu_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveRoom {
    pub id: i64,
    pub name: Option<String>,
    pub desc: Option<String>,
    pub remark: Option<String>,
    pub status: i64,
    pub is_show: bool,
    pub is_fake: bool,
    pub cover_img: Option<String>,
    pub bg_img: Option<String>,
    pub key: Option<String>,
    pub room_type: i64,
    pub cdn: bool,
    pub pull_is_should_auth: bool,
    pub weight: i64,
    pub pull: PullUrls,
    pub push: PushUrls,
    pub cdn_pull: PullUrls,
    pub cdn_push: PushUrls,
    pub forward: ForwardUrls,
    pub created_at: String,
    pub updated_at: String,
}

/// Writable fields of a live room. `None` leaves a column untouched on update
/// and falls back to the column default on create.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveRoomInput {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub remark: Option<String>,
    pub status: Option<i64>,
    pub is_show: Option<bool>,
    pub is_fake: Option<bool>,
    pub cover_img: Option<String>,
    pub bg_img: Option<String>,
    pub room_type: Option<i64>,
    pub cdn: Option<bool>,
    pub pull_is_should_auth: Option<bool>,
    pub weight: Option<i64>,
    pub pull: PullUrls,
    pub push: PushUrls,
    pub cdn_pull: PullUrls,
    pub cdn_push: PushUrls,
    pub forward: ForwardUrls,
}

impl LiveRoomInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(DomainError::Validation(
                    "Live room name cannot be blank".to_string(),
                ));
            }
            if name.chars().count() > 100 {
                return Err(DomainError::Validation(
                    "Live room name cannot exceed 100 characters".to_string(),
                ));
            }
        }
        if let Some(desc) = &self.desc {
            if desc.chars().count() > 500 {
                return Err(DomainError::Validation(
                    "Live room description cannot exceed 500 characters".to_string(),
                ));
            }
        }
        if matches!(self.weight, Some(w) if w < 0) {
            return Err(DomainError::Validation(
                "Live room weight cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Equality filters of the live room list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveRoomFilter {
    pub id: Option<i64>,
    pub status: Option<i64>,
    pub is_show: Option<bool>,
    pub is_fake: Option<bool>,
    pub room_type: Option<i64>,
    pub cdn: Option<bool>,
    pub pull_is_should_auth: Option<bool>,
}

crate::allowed_columns! {
    pub enum LiveRoomColumn {
        Id => "id",
        Name => "name",
        Status => "status",
        IsShow => "is_show",
        Weight => "weight",
        RoomType => "room_type",
        CreatedAt => "created_at",
        UpdatedAt => "updated_at",
    }
}
