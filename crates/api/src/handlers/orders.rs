use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use livehub_application::use_cases::CreatedOrder;
use livehub_domain::{Order, OrderFilter, Page};
use tracing::debug;

use crate::{
    dto::{CreateOrderRequest, ListParams, OrderFilterParams, PayStatusQuery, PayStatusResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(get_orders).post(create_order))
        .route("/orders/pay-status", get(get_pay_status))
}

async fn get_orders(
    State(state): State<AppState>,
    Query(list): Query<ListParams>,
    Query(filter): Query<OrderFilterParams>,
) -> Result<Json<Page<Order>>, ApiError> {
    let query = list.into_query(OrderFilter::from(filter))?;
    let page = state.orders.get_orders.list(query).await?;
    debug!(
        count = page.rows.len(),
        total = page.total,
        "Orders retrieved successfully"
    );
    Ok(Json(page))
}

async fn create_order(
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<CreatedOrder>), ApiError> {
    let created = state
        .orders
        .create_order
        .execute(req.user_id, req.total_amount, req.subject, req.body)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_pay_status(
    State(state): State<AppState>,
    Query(params): Query<PayStatusQuery>,
) -> Result<Json<PayStatusResponse>, ApiError> {
    let status = state
        .orders
        .get_pay_status
        .execute(&params.out_trade_no)
        .await?;
    Ok(Json(PayStatusResponse {
        out_trade_no: params.out_trade_no,
        status,
    }))
}
