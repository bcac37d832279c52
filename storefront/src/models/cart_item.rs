// storefront/src/models/cart_item.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Product, ProductId};

/// One line of a user's cart. Name, price and image are copied from the
/// catalog when the line is created and are not refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
  pub product_id: ProductId,
  pub name: String,
  pub price: Decimal,
  pub image: String,
  pub quantity: u32,
}

impl CartLineItem {
  pub fn snapshot(product: &Product, quantity: u32) -> Self {
    Self {
      product_id: product.id,
      name: product.name.clone(),
      price: product.price,
      image: product.image.clone(),
      quantity,
    }
  }
}
