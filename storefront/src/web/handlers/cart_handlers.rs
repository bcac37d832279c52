// storefront/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::ProductId;
use crate::state::AppState;

// --- Request DTOs ---
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequestPayload {
  pub product_id: ProductId,
  #[serde(default = "default_quantity")]
  pub quantity: i64,
}

fn default_quantity() -> i64 {
  1
}

#[derive(Deserialize, Debug)]
pub struct UpdateCartItemPayload {
  pub quantity: Option<i64>,
}

fn parse_path_product_id(raw: &str) -> Result<ProductId, AppError> {
  raw
    .parse::<ProductId>()
    .map_err(|e| AppError::Validation(format!("Invalid product ID: {}", e)))
}

// --- Handler Implementation ---

#[instrument(name = "handler::get_cart", skip(app_state, path), fields(user_id = %path.as_ref()))]
pub async fn get_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let user_id = path.into_inner();
  let cart = app_state.carts.get_cart(&user_id).await?;
  Ok(HttpResponse::Ok().json(cart))
}

#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, path, req_payload),
    fields(user_id = %path.as_ref(), product_id = %req_payload.product_id, quantity = %req_payload.quantity)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  req_payload: web::Json<AddToCartRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let user_id = path.into_inner();
  let AddToCartRequestPayload { product_id, quantity } = req_payload.into_inner();

  let cart = app_state.carts.add_item(&user_id, product_id, quantity).await?;
  info!("Add to cart successful. Cart now has {} lines.", cart.len());

  Ok(HttpResponse::Ok().json(json!({
      "message": "Item added to cart",
      "cart": cart
  })))
}

#[instrument(name = "handler::remove_from_cart", skip(app_state, path))]
pub async fn remove_from_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
  let (user_id, raw_product_id) = path.into_inner();
  let product_id = parse_path_product_id(&raw_product_id)?;

  let cart = app_state.carts.remove_item(&user_id, product_id).await?;
  Ok(HttpResponse::Ok().json(json!({
      "message": "Item removed from cart",
      "cart": cart
  })))
}

#[instrument(name = "handler::update_cart_item", skip(app_state, path, req_payload))]
pub async fn update_cart_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<(String, String)>,
  req_payload: web::Json<UpdateCartItemPayload>,
) -> Result<HttpResponse, AppError> {
  let (user_id, raw_product_id) = path.into_inner();
  let product_id = parse_path_product_id(&raw_product_id)?;
  let quantity = req_payload
    .quantity
    .ok_or_else(|| AppError::Validation("Quantity is required".to_string()))?;

  let cart = app_state.carts.update_quantity(&user_id, product_id, quantity).await?;
  Ok(HttpResponse::Ok().json(json!({
      "message": "Cart updated",
      "cart": cart
  })))
}

#[instrument(name = "handler::clear_cart", skip(app_state, path), fields(user_id = %path.as_ref()))]
pub async fn clear_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let user_id = path.into_inner();
  app_state.carts.clear_cart(&user_id).await?;
  Ok(HttpResponse::Ok().json(json!({ "message": "Cart cleared" })))
}
