// storefront/src/models/order.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::ids::deserialize_optional_user_id;
use super::ProductId;

/// Order status. The well-known values are typed; anything else an admin
/// sends is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
  Pending,
  Processing,
  Shipped,
  Delivered,
  Cancelled,
  Other(String),
}

impl OrderStatus {
  pub fn as_str(&self) -> &str {
    match self {
      OrderStatus::Pending => "pending",
      OrderStatus::Processing => "processing",
      OrderStatus::Shipped => "shipped",
      OrderStatus::Delivered => "delivered",
      OrderStatus::Cancelled => "cancelled",
      OrderStatus::Other(s) => s,
    }
  }
}

impl From<String> for OrderStatus {
  fn from(s: String) -> Self {
    match s.as_str() {
      "pending" => OrderStatus::Pending,
      "processing" => OrderStatus::Processing,
      "shipped" => OrderStatus::Shipped,
      "delivered" => OrderStatus::Delivered,
      "cancelled" => OrderStatus::Cancelled,
      _ => OrderStatus::Other(s),
    }
  }
}

impl From<&str> for OrderStatus {
  fn from(s: &str) -> Self {
    OrderStatus::from(s.to_string())
  }
}

impl From<OrderStatus> for String {
  fn from(status: OrderStatus) -> Self {
    match status {
      OrderStatus::Other(s) => s,
      known => known.as_str().to_string(),
    }
  }
}

impl fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A line submitted with an order. Only `productId` and `quantity` are
/// checked; the descriptive fields, and any others the client sends, are
/// stored and echoed back as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
  pub product_id: ProductId,
  pub quantity: i64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub price: Option<Decimal>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
  pub order_id: String,
  pub user_id: String,
  pub items: Vec<OrderLineItem>,
  pub customer_info: Value,
  pub total_amount: Decimal,
  pub status: OrderStatus,
  pub created_at: DateTime<Utc>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/orders/create`. Every field is optional at the parsing
/// stage so that absent fields surface as one validation error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
  #[serde(default, deserialize_with = "deserialize_optional_user_id")]
  pub user_id: Option<String>,
  #[serde(default)]
  pub items: Option<Vec<OrderLineItem>>,
  #[serde(default)]
  pub customer_info: Option<Value>,
  #[serde(default)]
  pub total_amount: Option<Decimal>,
}
