use async_trait::async_trait;
use chrono::Utc;
use livehub_application::ports::LiveRoomRepository;
use livehub_domain::{
    DomainError, ForwardUrls, ListQuery, LiveRoom, LiveRoomColumn, LiveRoomFilter, LiveRoomInput,
    PullUrls, PushUrls, TIMESTAMP_FORMAT,
};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::{debug, error, instrument};

use super::sql::{bind_all, BindValue, ListWhere};

const LIVE_ROOM_COLUMNS: &str = "id, name, \"desc\", remark, status, is_show, is_fake, \
     cover_img, bg_img, \"key\", room_type, cdn, pull_is_should_auth, weight, \
     rtmp_url, flv_url, hls_url, webrtc_url, \
     push_rtmp_url, push_obs_server, push_obs_stream_key, push_webrtc_url, push_srt_url, \
     cdn_rtmp_url, cdn_flv_url, cdn_hls_url, cdn_webrtc_url, \
     cdn_push_rtmp_url, cdn_push_obs_server, cdn_push_obs_stream_key, cdn_push_webrtc_url, \
     cdn_push_srt_url, \
     forward_bilibili_url, forward_douyin_url, forward_douyu_url, forward_huya_url, \
     forward_kuaishou_url, forward_xiaohongshu_url, \
     datetime(created_at) AS created_at, datetime(updated_at) AS updated_at";

pub struct SqliteLiveRoomRepository {
    pool: SqlitePool,
}

impl SqliteLiveRoomRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn pull_urls(row: &SqliteRow, prefix: &str) -> Result<PullUrls, sqlx::Error> {
    Ok(PullUrls {
        rtmp_url: row.try_get(format!("{prefix}rtmp_url").as_str())?,
        flv_url: row.try_get(format!("{prefix}flv_url").as_str())?,
        hls_url: row.try_get(format!("{prefix}hls_url").as_str())?,
        webrtc_url: row.try_get(format!("{prefix}webrtc_url").as_str())?,
    })
}

fn push_urls(row: &SqliteRow, prefix: &str) -> Result<PushUrls, sqlx::Error> {
    Ok(PushUrls {
        push_rtmp_url: row.try_get(format!("{prefix}push_rtmp_url").as_str())?,
        push_obs_server: row.try_get(format!("{prefix}push_obs_server").as_str())?,
        push_obs_stream_key: row.try_get(format!("{prefix}push_obs_stream_key").as_str())?,
        push_webrtc_url: row.try_get(format!("{prefix}push_webrtc_url").as_str())?,
        push_srt_url: row.try_get(format!("{prefix}push_srt_url").as_str())?,
    })
}

fn row_to_live_room(row: &SqliteRow) -> Result<LiveRoom, sqlx::Error> {
    Ok(LiveRoom {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        desc: row.try_get("desc")?,
        remark: row.try_get("remark")?,
        status: row.try_get("status")?,
        is_show: row.try_get("is_show")?,
        is_fake: row.try_get("is_fake")?,
        cover_img: row.try_get("cover_img")?,
        bg_img: row.try_get("bg_img")?,
        key: row.try_get("key")?,
        room_type: row.try_get("room_type")?,
        cdn: row.try_get("cdn")?,
        pull_is_should_auth: row.try_get("pull_is_should_auth")?,
        weight: row.try_get("weight")?,
        pull: pull_urls(row, "")?,
        push: push_urls(row, "")?,
        cdn_pull: pull_urls(row, "cdn_")?,
        cdn_push: push_urls(row, "cdn_")?,
        forward: ForwardUrls {
            forward_bilibili_url: row.try_get("forward_bilibili_url")?,
            forward_douyin_url: row.try_get("forward_douyin_url")?,
            forward_douyu_url: row.try_get("forward_douyu_url")?,
            forward_huya_url: row.try_get("forward_huya_url")?,
            forward_kuaishou_url: row.try_get("forward_kuaishou_url")?,
            forward_xiaohongshu_url: row.try_get("forward_xiaohongshu_url")?,
        },
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn push_text(fields: &mut Vec<(&'static str, BindValue)>, column: &'static str, v: Option<String>) {
    if let Some(v) = v {
        fields.push((column, BindValue::Text(v)));
    }
}

/// Columns the input sets, with their values. Unset fields are skipped.
fn input_fields(input: LiveRoomInput) -> Vec<(&'static str, BindValue)> {
    let mut fields = Vec::new();

    push_text(&mut fields, "name", input.name);
    push_text(&mut fields, "\"desc\"", input.desc);
    push_text(&mut fields, "remark", input.remark);
    push_text(&mut fields, "cover_img", input.cover_img);
    push_text(&mut fields, "bg_img", input.bg_img);

    let flags = [
        ("status", input.status.map(BindValue::Int)),
        ("is_show", input.is_show.map(BindValue::from)),
        ("is_fake", input.is_fake.map(BindValue::from)),
        ("room_type", input.room_type.map(BindValue::Int)),
        ("cdn", input.cdn.map(BindValue::from)),
        ("pull_is_should_auth", input.pull_is_should_auth.map(BindValue::from)),
        ("weight", input.weight.map(BindValue::Int)),
    ];
    fields.extend(flags.into_iter().filter_map(|(c, v)| v.map(|v| (c, v))));

    let pull = input.pull;
    push_text(&mut fields, "rtmp_url", pull.rtmp_url);
    push_text(&mut fields, "flv_url", pull.flv_url);
    push_text(&mut fields, "hls_url", pull.hls_url);
    push_text(&mut fields, "webrtc_url", pull.webrtc_url);

    let push = input.push;
    push_text(&mut fields, "push_rtmp_url", push.push_rtmp_url);
    push_text(&mut fields, "push_obs_server", push.push_obs_server);
    push_text(&mut fields, "push_obs_stream_key", push.push_obs_stream_key);
    push_text(&mut fields, "push_webrtc_url", push.push_webrtc_url);
    push_text(&mut fields, "push_srt_url", push.push_srt_url);

    let cdn_pull = input.cdn_pull;
    push_text(&mut fields, "cdn_rtmp_url", cdn_pull.rtmp_url);
    push_text(&mut fields, "cdn_flv_url", cdn_pull.flv_url);
    push_text(&mut fields, "cdn_hls_url", cdn_pull.hls_url);
    push_text(&mut fields, "cdn_webrtc_url", cdn_pull.webrtc_url);

    let cdn_push = input.cdn_push;
    push_text(&mut fields, "cdn_push_rtmp_url", cdn_push.push_rtmp_url);
    push_text(&mut fields, "cdn_push_obs_server", cdn_push.push_obs_server);
    push_text(&mut fields, "cdn_push_obs_stream_key", cdn_push.push_obs_stream_key);
    push_text(&mut fields, "cdn_push_webrtc_url", cdn_push.push_webrtc_url);
    push_text(&mut fields, "cdn_push_srt_url", cdn_push.push_srt_url);

    let forward = input.forward;
    push_text(&mut fields, "forward_bilibili_url", forward.forward_bilibili_url);
    push_text(&mut fields, "forward_douyin_url", forward.forward_douyin_url);
    push_text(&mut fields, "forward_douyu_url", forward.forward_douyu_url);
    push_text(&mut fields, "forward_huya_url", forward.forward_huya_url);
    push_text(&mut fields, "forward_kuaishou_url", forward.forward_kuaishou_url);
    push_text(&mut fields, "forward_xiaohongshu_url", forward.forward_xiaohongshu_url);

    fields
}

#[async_trait]
impl LiveRoomRepository for SqliteLiveRoomRepository {
    #[instrument(skip(self))]
    async fn list(
        &self,
        query: &ListQuery<LiveRoomColumn, LiveRoomFilter>,
    ) -> Result<(Vec<LiveRoom>, u64), DomainError> {
        let filter = &query.filter;
        let mut conditions = ListWhere::new();
        conditions
            .eq("id", filter.id)
            .eq("status", filter.status)
            .eq("is_show", filter.is_show)
            .eq("is_fake", filter.is_fake)
            .eq("room_type", filter.room_type)
            .eq("cdn", filter.cdn)
            .eq("pull_is_should_auth", filter.pull_is_should_auth)
            .keyword(&["name", "\"desc\""], query.keyword.as_deref())
            .time_window(query.time_filter.as_ref());

        let (count_query, rows_query) = conditions.build(LIVE_ROOM_COLUMNS, "live_room", query);

        let total = count_query.fetch_count(&self.pool).await.map_err(|e| {
            error!(error = %e, "Failed to count live rooms");
            DomainError::DatabaseError(e.to_string())
        })?;

        let rows = rows_query.query().fetch_all(&self.pool).await.map_err(|e| {
            error!(error = %e, "Failed to list live rooms");
            DomainError::DatabaseError(e.to_string())
        })?;

        let rooms = rows
            .iter()
            .map(row_to_live_room)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                error!(error = %e, "Failed to decode live room row");
                DomainError::DatabaseError(e.to_string())
            })?;

        debug!(count = rooms.len(), total, "Live rooms listed");
        Ok((rooms, total))
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<LiveRoom>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM live_room WHERE id = ?",
            LIVE_ROOM_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query live room by id");
            DomainError::DatabaseError(e.to_string())
        })?;

        row.as_ref()
            .map(row_to_live_room)
            .transpose()
            .map_err(|e| DomainError::DatabaseError(e.to_string()))
    }

    #[instrument(skip(self))]
    async fn create(&self, input: LiveRoomInput, key: String) -> Result<LiveRoom, DomainError> {
        let now = Utc::now().format(TIMESTAMP_FORMAT).to_string();

        let mut fields = input_fields(input);
        fields.push(("\"key\"", BindValue::Text(key)));
        fields.push(("created_at", BindValue::Text(now.clone())));
        fields.push(("updated_at", BindValue::Text(now)));

        let columns: Vec<&str> = fields.iter().map(|(c, _)| *c).collect();
        let placeholders = vec!["?"; fields.len()].join(", ");
        let binds: Vec<BindValue> = fields.into_iter().map(|(_, v)| v).collect();
        let sql = format!(
            "INSERT INTO live_room ({}) VALUES ({}) RETURNING {}",
            columns.join(", "),
            placeholders,
            LIVE_ROOM_COLUMNS
        );

        let row = bind_all(sqlx::query(&sql), &binds)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to create live room");
                DomainError::DatabaseError(e.to_string())
            })?;

        row_to_live_room(&row).map_err(|e| DomainError::DatabaseError(e.to_string()))
    }

    #[instrument(skip(self))]
    async fn update(&self, id: i64, input: LiveRoomInput) -> Result<LiveRoom, DomainError> {
        let now = Utc::now().format(TIMESTAMP_FORMAT).to_string();

        let mut fields = input_fields(input);
        fields.push(("updated_at", BindValue::Text(now)));

        let assignments: Vec<String> = fields.iter().map(|(c, _)| format!("{} = ?", c)).collect();
        let mut binds: Vec<BindValue> = fields.into_iter().map(|(_, v)| v).collect();
        binds.push(BindValue::Int(id));
        let sql = format!(
            "UPDATE live_room SET {} WHERE id = ? RETURNING {}",
            assignments.join(", "),
            LIVE_ROOM_COLUMNS
        );

        let row = bind_all(sqlx::query(&sql), &binds)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to update live room");
                DomainError::DatabaseError(e.to_string())
            })?
            .ok_or(DomainError::LiveRoomNotFound(id))?;

        row_to_live_room(&row).map_err(|e| DomainError::DatabaseError(e.to_string()))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM live_room WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete live room");
                DomainError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::LiveRoomNotFound(id));
        }

        Ok(())
    }
}
