//! LiveHub Infrastructure Layer
pub mod database;
pub mod payment;
pub mod repositories;
