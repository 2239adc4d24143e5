use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(handlers::analytics::routes())
        .merge(handlers::visitor_logs::routes())
        .merge(handlers::live_rooms::routes())
        .merge(handlers::orders::routes())
        .merge(handlers::wallet_records::routes())
        .with_state(state)
}
