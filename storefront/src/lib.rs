// storefront/src/lib.rs

//! Storefront API: a read-only product catalog backed by a JSON file, plus
//! per-user carts and orders kept in process memory, served over actix-web.

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
pub mod telemetry;
pub mod web;

pub use config::AppConfig;
pub use errors::{AppError, Result};
pub use state::AppState;
