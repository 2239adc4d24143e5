pub mod analytics;
pub mod health;
pub mod live_rooms;
pub mod orders;
pub mod visitor_logs;
pub mod wallet_records;

pub use health::health_check;
