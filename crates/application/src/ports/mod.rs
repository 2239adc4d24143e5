mod calendar_repository;
mod live_room_repository;
mod order_repository;
mod payment_gateway;
mod visitor_analytics_repository;
mod visitor_log_repository;
mod wallet_record_repository;

pub use calendar_repository::CalendarRepository;
pub use live_room_repository::LiveRoomRepository;
pub use order_repository::OrderRepository;
pub use payment_gateway::{PaymentGateway, PrecreateRequest, PrecreateResponse};
pub use visitor_analytics_repository::VisitorAnalyticsRepository;
pub use visitor_log_repository::VisitorLogRepository;
pub use wallet_record_repository::WalletRecordRepository;
