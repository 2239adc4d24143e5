use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use livehub_domain::{Granularity, IpVisitRecord, ReportRow, UserVisitRecord};
use tracing::{debug, instrument};

use crate::{dto::AnalysisQuery, errors::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/visitor-logs/analysis/day", get(get_analysis_by_day))
        .route("/visitor-logs/analysis/hour", get(get_analysis_by_hour))
        .route(
            "/visitor-logs/analysis/ten-minutes",
            get(get_analysis_by_ten_minutes),
        )
        .route("/visitor-logs/users/{user_id}/visits", get(get_user_visits))
        .route("/visitor-logs/ips/{ip}/visits", get(get_ip_visits))
}

async fn analysis(
    state: AppState,
    granularity: Granularity,
    params: AnalysisQuery,
) -> Result<Json<Vec<ReportRow>>, ApiError> {
    let range = params.range()?;
    let order = params.order()?;

    let rows = state
        .analytics
        .get_report
        .execute(granularity, range, order)
        .await?;

    debug!(granularity = %granularity, buckets = rows.len(), "Visitor analysis served");
    Ok(Json(rows))
}

#[instrument(skip(state), name = "api_analysis_by_day")]
async fn get_analysis_by_day(
    State(state): State<AppState>,
    Query(params): Query<AnalysisQuery>,
) -> Result<Json<Vec<ReportRow>>, ApiError> {
    analysis(state, Granularity::Day, params).await
}

#[instrument(skip(state), name = "api_analysis_by_hour")]
async fn get_analysis_by_hour(
    State(state): State<AppState>,
    Query(params): Query<AnalysisQuery>,
) -> Result<Json<Vec<ReportRow>>, ApiError> {
    analysis(state, Granularity::Hour, params).await
}

#[instrument(skip(state), name = "api_analysis_by_ten_minutes")]
async fn get_analysis_by_ten_minutes(
    State(state): State<AppState>,
    Query(params): Query<AnalysisQuery>,
) -> Result<Json<Vec<ReportRow>>, ApiError> {
    analysis(state, Granularity::TenMinutes, params).await
}

#[instrument(skip(state), name = "api_user_visits")]
async fn get_user_visits(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Query(params): Query<AnalysisQuery>,
) -> Result<Json<Vec<UserVisitRecord>>, ApiError> {
    let range = params.range()?;
    let order = params.order()?;

    let rows = state
        .analytics
        .get_user_visit_record
        .execute(user_id, range, order)
        .await?;
    Ok(Json(rows))
}

#[instrument(skip(state), name = "api_ip_visits")]
async fn get_ip_visits(
    State(state): State<AppState>,
    Path(ip): Path<String>,
    Query(params): Query<AnalysisQuery>,
) -> Result<Json<Vec<IpVisitRecord>>, ApiError> {
    let range = params.range()?;
    let order = params.order()?;

    let rows = state
        .analytics
        .get_ip_visit_record
        .execute(&ip, range, order)
        .await?;
    Ok(Json(rows))
}
