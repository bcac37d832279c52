// storefront/src/models/product.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ProductId;

/// A catalog entry as stored in the product data file. Never mutated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: ProductId,
  pub name: String,
  pub price: Decimal,
  pub image: String,
  pub category: String,
  #[serde(default)]
  pub featured: bool,
  pub stock: u32,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub materials: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub dimensions: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub care_instructions: Option<String>,
  // Any other fields in the data file are passed through untouched.
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}
