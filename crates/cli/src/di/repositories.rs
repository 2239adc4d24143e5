use livehub_infrastructure::payment::UnconfiguredPaymentGateway;
use livehub_infrastructure::repositories::{
    SqliteCalendarRepository, SqliteLiveRoomRepository, SqliteOrderRepository,
    SqliteVisitorAnalyticsRepository, SqliteVisitorLogRepository, SqliteWalletRecordRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub calendar: Arc<SqliteCalendarRepository>,
    pub visitor_analytics: Arc<SqliteVisitorAnalyticsRepository>,
    pub visitor_log: Arc<SqliteVisitorLogRepository>,
    pub live_room: Arc<SqliteLiveRoomRepository>,
    pub order: Arc<SqliteOrderRepository>,
    pub wallet_record: Arc<SqliteWalletRecordRepository>,
    pub payment_gateway: Arc<UnconfiguredPaymentGateway>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            calendar: Arc::new(SqliteCalendarRepository::new(pool.clone())),
            visitor_analytics: Arc::new(SqliteVisitorAnalyticsRepository::new(pool.clone())),
            visitor_log: Arc::new(SqliteVisitorLogRepository::new(pool.clone())),
            live_room: Arc::new(SqliteLiveRoomRepository::new(pool.clone())),
            order: Arc::new(SqliteOrderRepository::new(pool.clone())),
            wallet_record: Arc::new(SqliteWalletRecordRepository::new(pool)),
            payment_gateway: Arc::new(UnconfiguredPaymentGateway),
        }
    }
}
