// storefront/src/main.rs

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use anyhow::Context;
use storefront::config::AppConfig;
use storefront::state::AppState;
use storefront::{telemetry, web};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Load configuration before logging so LOG_FORMAT can pick the formatter.
  let app_config = AppConfig::from_env().context("failed to load application configuration")?;
  telemetry::init_tracing(app_config.log_format);
  tracing::info!("Application configuration loaded successfully.");

  tracing::info!(store = %app_config.store_name, "Starting storefront API server...");

  if !app_config.products_data_path.exists() {
    // Not fatal: the catalog is re-read per request and may appear later.
    tracing::warn!(
      path = %app_config.products_data_path.display(),
      "Product data file does not exist yet; catalog requests will fail until it does."
    );
  }

  let server_address = app_config.bind_address();
  let app_state = AppState::new(app_config);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("failed to bind {}", server_address))?
  .run()
  .await
  .context("HTTP server terminated with an error")
}
