use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use livehub_domain::{Page, WalletRecordFilter};
use tracing::debug;

use crate::{
    dto::{ListParams, WalletRecordFilterParams, WalletRecordRequest, WalletRecordResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/wallet-records",
            get(get_wallet_records).post(create_wallet_record),
        )
        .route(
            "/wallet-records/{id}",
            get(get_wallet_record_by_id)
                .put(update_wallet_record)
                .delete(delete_wallet_record),
        )
}

async fn get_wallet_records(
    State(state): State<AppState>,
    Query(list): Query<ListParams>,
    Query(filter): Query<WalletRecordFilterParams>,
) -> Result<Json<Page<WalletRecordResponse>>, ApiError> {
    let query = list.into_query(WalletRecordFilter::from(filter))?;
    let page = state
        .wallet_records
        .get_wallet_records
        .list(query)
        .await?;
    debug!(
        count = page.rows.len(),
        total = page.total,
        "Wallet records retrieved successfully"
    );
    Ok(Json(page.map(WalletRecordResponse::from_record)))
}

async fn get_wallet_record_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<WalletRecordResponse>, ApiError> {
    let record = state
        .wallet_records
        .get_wallet_records
        .get_by_id(id)
        .await?;
    Ok(Json(WalletRecordResponse::from_record(record)))
}

async fn create_wallet_record(
    State(state): State<AppState>,
    Json(req): Json<WalletRecordRequest>,
) -> Result<(StatusCode, Json<WalletRecordResponse>), ApiError> {
    let record = state
        .wallet_records
        .create_wallet_record
        .execute(req.into())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(WalletRecordResponse::from_record(record)),
    ))
}

async fn update_wallet_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<WalletRecordRequest>,
) -> Result<Json<WalletRecordResponse>, ApiError> {
    let record = state
        .wallet_records
        .update_wallet_record
        .execute(id, req.into())
        .await?;
    Ok(Json(WalletRecordResponse::from_record(record)))
}

async fn delete_wallet_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .wallet_records
        .delete_wallet_record
        .execute(id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
