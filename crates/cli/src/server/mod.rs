pub mod signal;
pub mod web;

pub use signal::shutdown_signal;
pub use web::start_web_server;
