#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use livehub_api::{
    create_api_routes,
    state::{AnalyticsUseCases, LiveRoomUseCases, OrderUseCases, VisitorLogUseCases,
        WalletRecordUseCases},
    AppState,
};
use livehub_application::ports::{
    CalendarRepository, PaymentGateway, PrecreateRequest, PrecreateResponse,
};
use livehub_application::use_cases::*;
use livehub_domain::config::DatabaseConfig;
use livehub_domain::{CalendarSpan, DomainError, Granularity, TradeDetails};
use livehub_infrastructure::database::create_pool;
use livehub_infrastructure::payment::UnconfiguredPaymentGateway;
use livehub_infrastructure::repositories::{
    SqliteCalendarRepository, SqliteLiveRoomRepository, SqliteOrderRepository,
    SqliteVisitorAnalyticsRepository, SqliteVisitorLogRepository, SqliteWalletRecordRepository,
};
use serde_json::Value;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower::ServiceExt;

/// Gateway that accepts every order and reports a fixed trade status.
pub struct StubPaymentGateway {
    pub trade_status: Option<String>,
}

#[async_trait]
impl PaymentGateway for StubPaymentGateway {
    async fn precreate(
        &self,
        request: &PrecreateRequest,
    ) -> Result<PrecreateResponse, DomainError> {
        Ok(PrecreateResponse {
            qr_code: format!("https://qr.example/{}", request.out_trade_no),
        })
    }

    async fn query_trade(&self, out_trade_no: &str) -> Result<TradeDetails, DomainError> {
        Ok(TradeDetails {
            trade_no: Some(format!("T{}", out_trade_no)),
            trade_status: self.trade_status.clone(),
            ..Default::default()
        })
    }
}

pub async fn create_test_db() -> SqlitePool {
    let config = DatabaseConfig {
        path: ":memory:".to_string(),
        max_connections: 1,
        busy_timeout_secs: 5,
    };
    create_pool(&config).await.unwrap()
}

pub fn build_state(pool: &SqlitePool, gateway: Arc<dyn PaymentGateway>) -> AppState {
    let analytics_repo = Arc::new(SqliteVisitorAnalyticsRepository::new(pool.clone()));
    let visitor_log_repo = Arc::new(SqliteVisitorLogRepository::new(pool.clone()));
    let live_room_repo = Arc::new(SqliteLiveRoomRepository::new(pool.clone()));
    let order_repo = Arc::new(SqliteOrderRepository::new(pool.clone()));
    let wallet_repo = Arc::new(SqliteWalletRecordRepository::new(pool.clone()));

    AppState {
        analytics: AnalyticsUseCases {
            get_report: Arc::new(GetVisitorReportUseCase::new(analytics_repo.clone())),
            get_user_visit_record: Arc::new(GetUserVisitRecordUseCase::new(
                analytics_repo.clone(),
            )),
            get_ip_visit_record: Arc::new(GetIpVisitRecordUseCase::new(analytics_repo)),
        },
        visitor_logs: VisitorLogUseCases {
            record_visit: Arc::new(RecordVisitUseCase::new(
                visitor_log_repo.clone(),
                live_room_repo.clone(),
            )),
            delete_visitor_log: Arc::new(DeleteVisitorLogUseCase::new(visitor_log_repo)),
        },
        live_rooms: LiveRoomUseCases {
            get_live_rooms: Arc::new(GetLiveRoomsUseCase::new(live_room_repo.clone())),
            create_live_room: Arc::new(CreateLiveRoomUseCase::new(live_room_repo.clone())),
            update_live_room: Arc::new(UpdateLiveRoomUseCase::new(live_room_repo.clone())),
            delete_live_room: Arc::new(DeleteLiveRoomUseCase::new(live_room_repo)),
        },
        orders: OrderUseCases {
            get_orders: Arc::new(GetOrdersUseCase::new(order_repo.clone())),
            create_order: Arc::new(CreateOrderUseCase::new(
                order_repo.clone(),
                gateway.clone(),
                "FACE_TO_FACE_PAYMENT".to_string(),
            )),
            get_pay_status: Arc::new(GetPayStatusUseCase::new(order_repo, gateway)),
        },
        wallet_records: WalletRecordUseCases {
            get_wallet_records: Arc::new(GetWalletRecordsUseCase::new(wallet_repo.clone())),
            create_wallet_record: Arc::new(CreateWalletRecordUseCase::new(wallet_repo.clone())),
            update_wallet_record: Arc::new(UpdateWalletRecordUseCase::new(wallet_repo.clone())),
            delete_wallet_record: Arc::new(DeleteWalletRecordUseCase::new(wallet_repo)),
        },
    }
}

pub async fn create_test_app() -> (Router, SqlitePool) {
    let pool = create_test_db().await;
    let app = create_api_routes(build_state(&pool, Arc::new(UnconfiguredPaymentGateway)));
    (app, pool)
}

pub async fn create_test_app_with_gateway(gateway: StubPaymentGateway) -> (Router, SqlitePool) {
    let pool = create_test_db().await;
    let app = create_api_routes(build_state(&pool, Arc::new(gateway)));
    (app, pool)
}

pub async fn seed_calendar(pool: &SqlitePool, from: &str, to: &str) {
    let repo = SqliteCalendarRepository::new(pool.clone());
    let span = CalendarSpan::new(from.parse().unwrap(), to.parse().unwrap()).unwrap();
    for granularity in Granularity::ALL {
        repo.insert_missing(granularity, span.bucket_keys(granularity).collect())
            .await
            .unwrap();
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}
