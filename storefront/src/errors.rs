// storefront/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::models::ProductId;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
  /// Missing or malformed request fields.
  #[error("{0}")]
  Validation(String),

  #[error("Product with ID {0} not found")]
  ProductNotFound(String),

  #[error("Cart not found")]
  CartNotFound,

  #[error("Item not found in cart")]
  CartItemNotFound(ProductId),

  #[error("No orders found for this user")]
  NoOrdersForUser,

  #[error("Order not found")]
  OrderNotFound(String),

  #[error("Not enough stock for {product_name}. Available: {available}, Requested: {requested}")]
  InsufficientStock {
    product_name: String,
    available: u32,
    requested: u64,
  },

  /// The product data source could not be read or parsed.
  #[error("Product catalog unavailable: {0}")]
  CatalogUnavailable(String),

  #[error("Store Error: {0}")]
  Store(#[from] StoreError),

  #[error("Configuration Error: {0}")]
  Config(String),
}

impl AppError {
  /// The message clients see in the `error` field. Server-side failures are
  /// reported generically; their detail only goes to the log.
  fn public_message(&self) -> String {
    match self {
      AppError::CatalogUnavailable(_) => "Failed to load product catalog".to_string(),
      AppError::Store(_) => "Failed to access storage".to_string(),
      AppError::Config(_) => "Configuration issue".to_string(),
      other => other.to_string(),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) | AppError::InsufficientStock { .. } => StatusCode::BAD_REQUEST,
      AppError::ProductNotFound(_)
      | AppError::CartNotFound
      | AppError::CartItemNotFound(_)
      | AppError::NoOrdersForUser
      | AppError::OrderNotFound(_) => StatusCode::NOT_FOUND,
      AppError::CatalogUnavailable(_) | AppError::Store(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with server error");
    } else {
      tracing::warn!(application_error = %self, status = status.as_u16(), "Responding with client error");
    }
    HttpResponse::build(status).json(json!({ "error": self.public_message() }))
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
