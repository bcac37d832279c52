// storefront/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Pretty,
  Json,
}

impl FromStr for LogFormat {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "pretty" | "text" => Ok(LogFormat::Pretty),
      "json" => Ok(LogFormat::Json),
      other => Err(AppError::Config(format!(
        "Invalid LOG_FORMAT '{}': expected 'pretty' or 'json'",
        other
      ))),
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  /// JSON array of products, re-read on every catalog request.
  pub products_data_path: PathBuf,
  /// Shown in the health check message.
  pub store_name: String,
  pub log_format: LogFormat,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      server_host: "127.0.0.1".to_string(),
      server_port: 3000,
      products_data_path: PathBuf::from("data/products.json"),
      store_name: "Guldoze".to_string(),
      log_format: LogFormat::Pretty,
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| env::var(var_name).ok().filter(|v| !v.trim().is_empty());
    let defaults = Self::default();

    let server_host = get_env("SERVER_HOST").unwrap_or(defaults.server_host);
    // SERVER_PORT wins; PORT is honoured for hosts that only set that.
    let server_port = match get_env("SERVER_PORT").map(|v| ("SERVER_PORT", v)).or_else(|| get_env("PORT").map(|v| ("PORT", v))) {
      Some((var_name, raw)) => raw
        .trim()
        .parse::<u16>()
        .map_err(|e| AppError::Config(format!("Invalid {}: {}", var_name, e)))?,
      None => defaults.server_port,
    };
    let products_data_path = get_env("PRODUCTS_DATA_PATH")
      .map(PathBuf::from)
      .unwrap_or(defaults.products_data_path);
    let store_name = get_env("STORE_NAME").unwrap_or(defaults.store_name);
    let log_format = match get_env("LOG_FORMAT") {
      Some(raw) => raw.parse::<LogFormat>()?,
      None => defaults.log_format,
    };

    Ok(Self {
      server_host,
      server_port,
      products_data_path,
      store_name,
      log_format,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
