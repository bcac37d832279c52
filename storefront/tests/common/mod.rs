// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use storefront::config::AppConfig;
use storefront::models::{CartLineItem, Order};
use storefront::services::{CartService, CatalogService, OrderService};
use storefront::state::AppState;
use storefront::store::InMemoryStore;
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Catalog fixtures ---

/// A product data file in the system temp directory, removed on drop.
pub struct TempCatalog {
  path: PathBuf,
}

impl TempCatalog {
  pub fn new(products: &Value) -> Self {
    let path = std::env::temp_dir().join(format!("storefront-catalog-{}.json", uuid::Uuid::new_v4()));
    let catalog = Self { path };
    catalog.write(products);
    catalog
  }

  pub fn with_sample_products() -> Self {
    Self::new(&sample_products())
  }

  /// Overwrites the file, the way an external edit would.
  pub fn write(&self, products: &Value) {
    std::fs::write(&self.path, serde_json::to_vec_pretty(products).expect("serialize catalog"))
      .expect("write catalog file");
  }

  pub fn write_raw(&self, contents: &str) {
    std::fs::write(&self.path, contents).expect("write catalog file");
  }

  pub fn path(&self) -> &Path {
    &self.path
  }
}

impl Drop for TempCatalog {
  fn drop(&mut self) {
    let _ = std::fs::remove_file(&self.path);
  }
}

pub fn product_json(id: u32, name: &str, category: &str, featured: bool, stock: u32, price: f64) -> Value {
  json!({
    "id": id,
    "name": name,
    "price": price,
    "image": format!("/images/{}.jpg", id),
    "category": category,
    "featured": featured,
    "stock": stock,
    "description": format!("{} description", name),
    "materials": "Oak",
    "dimensions": "10 x 10 cm",
    "careInstructions": "Keep dry."
  })
}

/// Product 1 has stock 5, matching the cart walkthrough scenario.
pub fn sample_products() -> Value {
  json!([
    product_json(1, "Oak Chair", "furniture", true, 5, 120.0),
    product_json(2, "Linen Pillow", "textiles", false, 20, 39.5),
    product_json(3, "Stoneware Vase", "decor", true, 12, 64.0),
    product_json(4, "Walnut Table", "Furniture", false, 2, 219.99),
    product_json(5, "Wool Blanket", "textiles", false, 0, 129.95)
  ])
}

// --- Service builders ---

pub fn catalog_service(catalog: &TempCatalog) -> Arc<CatalogService> {
  Arc::new(CatalogService::new(catalog.path()))
}

pub fn cart_service(catalog: &TempCatalog) -> CartService {
  CartService::new(
    catalog_service(catalog),
    Arc::new(InMemoryStore::<Vec<CartLineItem>>::new()),
  )
}

pub fn order_service(catalog: &TempCatalog) -> OrderService {
  OrderService::new(catalog_service(catalog), Arc::new(InMemoryStore::<Vec<Order>>::new()))
}

pub fn app_state(catalog: &TempCatalog) -> AppState {
  AppState::new(AppConfig {
    products_data_path: catalog.path().to_path_buf(),
    ..AppConfig::default()
  })
}
