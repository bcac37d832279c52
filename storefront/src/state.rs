// storefront/src/state.rs
use crate::config::AppConfig;
use crate::models::{CartLineItem, Order};
use crate::services::cart_service::CartStore;
use crate::services::order_service::OrderStore;
use crate::services::{CartService, CatalogService, OrderService};
use crate::store::InMemoryStore;
use std::sync::Arc;

/// Everything the handlers share. Built once at startup and cloned into each
/// actix worker.
#[derive(Clone)]
pub struct AppState {
  pub config: Arc<AppConfig>,
  pub catalog: Arc<CatalogService>,
  pub carts: Arc<CartService>,
  pub orders: Arc<OrderService>,
}

impl AppState {
  /// Wires the services over fresh in-memory stores.
  pub fn new(config: AppConfig) -> Self {
    let cart_store: CartStore = Arc::new(InMemoryStore::<Vec<CartLineItem>>::new());
    let order_store: OrderStore = Arc::new(InMemoryStore::<Vec<Order>>::new());
    Self::with_stores(config, cart_store, order_store)
  }

  pub fn with_stores(config: AppConfig, cart_store: CartStore, order_store: OrderStore) -> Self {
    let catalog = Arc::new(CatalogService::new(config.products_data_path.clone()));
    Self {
      carts: Arc::new(CartService::new(catalog.clone(), cart_store)),
      orders: Arc::new(OrderService::new(catalog.clone(), order_store)),
      catalog,
      config: Arc::new(config),
    }
  }
}
