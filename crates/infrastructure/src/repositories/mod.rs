pub mod calendar_repository;
pub mod live_room_repository;
pub mod order_repository;
pub mod visitor_analytics_repository;
pub mod visitor_log_repository;
pub mod wallet_record_repository;

mod sql;

pub use calendar_repository::SqliteCalendarRepository;
pub use live_room_repository::SqliteLiveRoomRepository;
pub use order_repository::SqliteOrderRepository;
pub use visitor_analytics_repository::SqliteVisitorAnalyticsRepository;
pub use visitor_log_repository::SqliteVisitorLogRepository;
pub use wallet_record_repository::SqliteWalletRecordRepository;

pub use sql::{BindValue, BuiltQuery};
