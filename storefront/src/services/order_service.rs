// storefront/src/services/order_service.rs

//! Turns submitted cart snapshots into orders and tracks their status.
//!
//! Stock is re-validated here against the catalog, independently of the
//! checks made when items were added to the cart. It is not decremented.

use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::errors::{AppError, Result};
use crate::models::{CreateOrderRequest, Order, OrderLineItem, OrderStatus, Product, ProductId};
use crate::services::catalog_service::CatalogService;
use crate::services::order_id::OrderIdGenerator;
use crate::store::{KeyValueStore, UserLocks};

pub type OrderStore = Arc<dyn KeyValueStore<Vec<Order>>>;

pub struct OrderService {
  catalog: Arc<CatalogService>,
  store: OrderStore,
  locks: UserLocks,
  ids: OrderIdGenerator,
}

impl OrderService {
  pub fn new(catalog: Arc<CatalogService>, store: OrderStore) -> Self {
    Self {
      catalog,
      store,
      locks: UserLocks::new(),
      ids: OrderIdGenerator::new(),
    }
  }

  #[instrument(name = "order_service::create_order", skip(self, request), fields(user_id))]
  pub async fn create_order(&self, request: CreateOrderRequest) -> Result<Order> {
    let CreateOrderRequest {
      user_id,
      items,
      customer_info,
      total_amount,
    } = request;

    let (user_id, items, customer_info, total_amount) = match (user_id, items, customer_info, total_amount) {
      (Some(user_id), Some(items), Some(customer_info), Some(total_amount)) if !user_id.is_empty() => {
        (user_id, items, customer_info, total_amount)
      }
      _ => {
        warn!("Order rejected: missing required fields.");
        return Err(AppError::Validation("Missing required fields".to_string()));
      }
    };
    tracing::Span::current().record("user_id", user_id.as_str());

    if items.is_empty() {
      warn!("Order rejected: no items.");
      return Err(AppError::Validation("Cart is empty".to_string()));
    }

    let products: HashMap<ProductId, Product> = self
      .catalog
      .list_all()
      .await?
      .into_iter()
      .map(|p| (p.id, p))
      .collect();
    for item in &items {
      validate_line(item, &products)?;
    }

    let _guard = self.locks.lock(&user_id).await;

    let order = Order {
      order_id: self.ids.next_id(),
      user_id: user_id.clone(),
      items,
      customer_info,
      total_amount,
      status: OrderStatus::Pending,
      created_at: Utc::now(),
      updated_at: None,
    };

    let mut orders = self.store.get(&user_id).await?.unwrap_or_default();
    orders.push(order.clone());
    self.store.set(&user_id, orders).await?;

    info!(order_id = %order.order_id, total = %order.total_amount, lines = order.items.len(), "Order created.");
    Ok(order)
  }

  #[instrument(name = "order_service::list_orders", skip(self))]
  pub async fn list_orders(&self, user_id: &str) -> Result<Vec<Order>> {
    Ok(self.store.get(user_id).await?.unwrap_or_default())
  }

  #[instrument(name = "order_service::get_order", skip(self))]
  pub async fn get_order(&self, user_id: &str, order_id: &str) -> Result<Order> {
    let orders = self.store.get(user_id).await?.ok_or(AppError::NoOrdersForUser)?;
    orders
      .into_iter()
      .find(|o| o.order_id == order_id)
      .ok_or_else(|| AppError::OrderNotFound(order_id.to_string()))
  }

  /// Overwrites the status and stamps `updated_at`. Any non-blank status text
  /// is accepted.
  #[instrument(name = "order_service::update_status", skip(self), fields(status = %status))]
  pub async fn update_status(&self, user_id: &str, order_id: &str, status: OrderStatus) -> Result<Order> {
    if status.as_str().trim().is_empty() {
      warn!("Status update rejected: blank status.");
      return Err(AppError::Validation("Status is required".to_string()));
    }

    // Orders are never deleted, so a user without any stays that way.
    if self.store.get(user_id).await?.is_none() {
      return Err(AppError::NoOrdersForUser);
    }
    let _guard = self.locks.lock(user_id).await;

    let mut orders = self.store.get(user_id).await?.ok_or(AppError::NoOrdersForUser)?;
    let order = orders
      .iter_mut()
      .find(|o| o.order_id == order_id)
      .ok_or_else(|| AppError::OrderNotFound(order_id.to_string()))?;

    order.status = status;
    order.updated_at = Some(Utc::now());
    let updated = order.clone();

    self.store.set(user_id, orders).await?;
    info!("Order status updated.");
    Ok(updated)
  }
}

fn validate_line(item: &OrderLineItem, products: &HashMap<ProductId, Product>) -> Result<()> {
  let product = products.get(&item.product_id).ok_or_else(|| {
    warn!(product_id = %item.product_id, "Order rejected: unknown product.");
    AppError::ProductNotFound(item.product_id.to_string())
  })?;

  if item.quantity <= 0 {
    warn!(product_id = %item.product_id, quantity = item.quantity, "Order rejected: non-positive quantity.");
    return Err(AppError::Validation(format!(
      "Invalid quantity {} for product with ID {}",
      item.quantity, item.product_id
    )));
  }

  // quantity is positive here
  let requested = item.quantity as u64;
  if requested > u64::from(product.stock) {
    warn!(product_id = %item.product_id, available = product.stock, requested, "Order rejected: insufficient stock.");
    return Err(AppError::InsufficientStock {
      product_name: product.name.clone(),
      available: product.stock,
      requested,
    });
  }
  Ok(())
}
