use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use livehub_domain::{LiveRoom, LiveRoomFilter, Page};
use tracing::debug;

use crate::{
    dto::{ListParams, LiveRoomFilterParams, LiveRoomRequest},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/live-rooms", get(get_live_rooms).post(create_live_room))
        .route(
            "/live-rooms/{id}",
            get(get_live_room_by_id)
                .put(update_live_room)
                .delete(delete_live_room),
        )
}

async fn get_live_rooms(
    State(state): State<AppState>,
    Query(list): Query<ListParams>,
    Query(filter): Query<LiveRoomFilterParams>,
) -> Result<Json<Page<LiveRoom>>, ApiError> {
    let query = list.into_query(LiveRoomFilter::from(filter))?;
    let page = state.live_rooms.get_live_rooms.list(query).await?;
    debug!(
        count = page.rows.len(),
        total = page.total,
        "Live rooms retrieved successfully"
    );
    Ok(Json(page))
}

async fn get_live_room_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<LiveRoom>, ApiError> {
    let room = state.live_rooms.get_live_rooms.get_by_id(id).await?;
    Ok(Json(room))
}

async fn create_live_room(
    State(state): State<AppState>,
    Json(req): Json<LiveRoomRequest>,
) -> Result<(StatusCode, Json<LiveRoom>), ApiError> {
    let room = state
        .live_rooms
        .create_live_room
        .execute(req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(room)))
}

async fn update_live_room(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<LiveRoomRequest>,
) -> Result<Json<LiveRoom>, ApiError> {
    let room = state
        .live_rooms
        .update_live_room
        .execute(id, req.into())
        .await?;
    Ok(Json(room))
}

async fn delete_live_room(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.live_rooms.delete_live_room.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
