use livehub_domain::{ForwardUrls, LiveRoomFilter, LiveRoomInput, PullUrls, PushUrls};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiveRoomFilterParams {
    pub id: Option<i64>,
    pub status: Option<i64>,
    pub is_show: Option<bool>,
    pub is_fake: Option<bool>,
    pub room_type: Option<i64>,
    pub cdn: Option<bool>,
    pub pull_is_should_auth: Option<bool>,
}

impl From<LiveRoomFilterParams> for LiveRoomFilter {
    fn from(p: LiveRoomFilterParams) -> Self {
        Self {
            id: p.id,
            status: p.status,
            is_show: p.is_show,
            is_fake: p.is_fake,
            room_type: p.room_type,
            cdn: p.cdn,
            pull_is_should_auth: p.pull_is_should_auth,
        }
    }
}

/// Body of create and update. The stream key is never accepted from clients.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiveRoomRequest {
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
    #[serde(default)]
    pub pull: PullUrls,
    #[serde(default)]
    pub push: PushUrls,
    #[serde(default)]
    pub cdn_pull: PullUrls,
    #[serde(default)]
    pub cdn_push: PushUrls,
    #[serde(default)]
    pub forward: ForwardUrls,
}

impl From<LiveRoomRequest> for LiveRoomInput {
    fn from(r: LiveRoomRequest) -> Self {
        Self {
            name: r.name,
            desc: r.desc,
            remark: r.remark,
            status: r.status,
            is_show: r.is_show,
            is_fake: r.is_fake,
            cover_img: r.cover_img,
            bg_img: r.bg_img,
            room_type: r.room_type,
            cdn: r.cdn,
            pull_is_should_auth: r.pull_is_should_auth,
            weight: r.weight,
            pull: r.pull,
            push: r.push,
            cdn_pull: r.cdn_pull,
            cdn_push: r.cdn_push,
            forward: r.forward,
        }
    }
}
