// storefront/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::ProductId;
use crate::state::AppState;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state.catalog.list_all().await?;
  info!("Successfully fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let raw_id = path.into_inner();
  // A non-numeric id can never match a product.
  let product_id = raw_id
    .parse::<ProductId>()
    .map_err(|_| AppError::ProductNotFound(raw_id.clone()))?;

  let product = app_state.catalog.get_by_id(product_id).await?;
  info!("Product {} fetched successfully.", product_id);
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::list_by_category", skip(app_state, path), fields(category = %path.as_ref()))]
pub async fn list_by_category_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let category = path.into_inner();
  let products = app_state.catalog.list_by_category(&category).await?;
  info!("Found {} products in category '{}'.", products.len(), category);
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::list_featured", skip(app_state))]
pub async fn list_featured_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state.catalog.list_featured().await?;
  info!("Found {} featured products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}
