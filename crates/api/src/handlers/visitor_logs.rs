use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, post},
    Router,
};
use livehub_domain::VisitorLog;

use crate::{dto::RecordVisitRequest, errors::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/visitor-logs", post(record_visit))
        .route("/visitor-logs/{id}", delete(delete_visitor_log))
}

async fn record_visit(
    State(state): State<AppState>,
    Json(req): Json<RecordVisitRequest>,
) -> Result<(StatusCode, Json<VisitorLog>), ApiError> {
    let log = state
        .visitor_logs
        .record_visit
        .execute(req.into_new_log()?)
        .await?;
    Ok((StatusCode::CREATED, Json(log)))
}

async fn delete_visitor_log(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.visitor_logs.delete_visitor_log.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
