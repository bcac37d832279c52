// storefront/src/services/catalog_service.rs

//! Read-only access to the product data file.
//!
//! The file is re-read and re-parsed on every call, so edits to it show up on
//! the next request without a restart.

use std::path::PathBuf;
use tracing::{debug, error, instrument};

use crate::errors::{AppError, Result};
use crate::models::{Product, ProductId};

#[derive(Debug, Clone)]
pub struct CatalogService {
  data_path: PathBuf,
}

impl CatalogService {
  pub fn new(data_path: impl Into<PathBuf>) -> Self {
    Self {
      data_path: data_path.into(),
    }
  }

  /// Reads a fresh snapshot of the catalog.
  #[instrument(name = "catalog::load_snapshot", skip(self), fields(path = %self.data_path.display()))]
  async fn load_snapshot(&self) -> Result<Vec<Product>> {
    let raw = tokio::fs::read_to_string(&self.data_path).await.map_err(|e| {
      error!(error = %e, "Failed to read product data file.");
      AppError::CatalogUnavailable(format!("failed to read {}: {}", self.data_path.display(), e))
    })?;

    let products: Vec<Product> = serde_json::from_str(&raw).map_err(|e| {
      error!(error = %e, "Product data file is malformed.");
      AppError::CatalogUnavailable(format!("malformed product data in {}: {}", self.data_path.display(), e))
    })?;

    debug!("Loaded {} products.", products.len());
    Ok(products)
  }

  pub async fn list_all(&self) -> Result<Vec<Product>> {
    self.load_snapshot().await
  }

  pub async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>> {
    Ok(self.load_snapshot().await?.into_iter().find(|p| p.id == id))
  }

  pub async fn get_by_id(&self, id: ProductId) -> Result<Product> {
    self
      .find_by_id(id)
      .await?
      .ok_or_else(|| AppError::ProductNotFound(id.to_string()))
  }

  /// Exact, case-sensitive match on the category name.
  pub async fn list_by_category(&self, category: &str) -> Result<Vec<Product>> {
    Ok(
      self
        .load_snapshot()
        .await?
        .into_iter()
        .filter(|p| p.category == category)
        .collect(),
    )
  }

  pub async fn list_featured(&self) -> Result<Vec<Product>> {
    Ok(self.load_snapshot().await?.into_iter().filter(|p| p.featured).collect())
  }
}
