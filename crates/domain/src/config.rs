pub mod analytics;
pub mod database;
pub mod errors;
pub mod logging;
pub mod orders;
pub mod root;
pub mod server;

pub use analytics::AnalyticsConfig;
pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use orders::OrdersConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
