// storefront/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::{CreateOrderRequest, OrderStatus};
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct UpdateOrderStatusPayload {
  pub status: Option<String>,
}

#[instrument(name = "handler::create_order", skip(app_state, req_payload))]
pub async fn create_order_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
  let order = app_state.orders.create_order(req_payload.into_inner()).await?;
  info!(order_id = %order.order_id, user_id = %order.user_id, "Order placed.");

  Ok(HttpResponse::Created().json(json!({
      "message": "Order created successfully",
      "orderId": order.order_id,
      "order": order
  })))
}

#[instrument(name = "handler::list_orders", skip(app_state, path), fields(user_id = %path.as_ref()))]
pub async fn list_orders_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let user_id = path.into_inner();
  let orders = app_state.orders.list_orders(&user_id).await?;
  Ok(HttpResponse::Ok().json(orders))
}

#[instrument(name = "handler::get_order", skip(app_state, path))]
pub async fn get_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
  let (user_id, order_id) = path.into_inner();
  let order = app_state.orders.get_order(&user_id, &order_id).await?;
  Ok(HttpResponse::Ok().json(order))
}

#[instrument(name = "handler::update_order_status", skip(app_state, path, req_payload))]
pub async fn update_order_status_handler(
  app_state: web::Data<AppState>,
  path: web::Path<(String, String)>,
  req_payload: web::Json<UpdateOrderStatusPayload>,
) -> Result<HttpResponse, AppError> {
  let (user_id, order_id) = path.into_inner();
  // A missing status arrives as blank text, which the service rejects.
  let status = req_payload.into_inner().status.unwrap_or_default();

  let order = app_state
    .orders
    .update_status(&user_id, &order_id, OrderStatus::from(status))
    .await?;
  info!(status = %order.status, "Order status changed.");

  Ok(HttpResponse::Ok().json(json!({
      "message": "Order status updated",
      "order": order
  })))
}
