// storefront/src/web/routes.rs

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::errors::AppError;
use crate::web::handlers::{cart_handlers, health_handlers, order_handlers, product_handlers};

/// Rejects unparseable JSON bodies with the same `{"error": ...}` shape as
/// every other failure.
fn json_config() -> web::JsonConfig {
  web::JsonConfig::default()
    .error_handler(|err, _req| AppError::Validation(format!("Invalid request body: {}", err)).into())
}

async fn not_found_handler() -> HttpResponse {
  HttpResponse::NotFound().json(json!({ "error": "Not found" }))
}

// This function is called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(json_config())
    .service(
      web::scope("/api")
        .route("/health", web::get().to(health_handlers::health_check_handler))
        // Catalog Routes
        .service(
          web::scope("/products")
            .route("", web::get().to(product_handlers::list_products_handler))
            .route("/featured/true", web::get().to(product_handlers::list_featured_handler))
            .route("/category/{category}", web::get().to(product_handlers::list_by_category_handler))
            .route("/{product_id}", web::get().to(product_handlers::get_product_handler)),
        )
        // Cart Routes
        .service(
          web::scope("/cart")
            .route("/{user_id}", web::get().to(cart_handlers::get_cart_handler))
            .route("/{user_id}/add", web::post().to(cart_handlers::add_to_cart_handler))
            .route("/{user_id}/clear", web::delete().to(cart_handlers::clear_cart_handler))
            .route(
              "/{user_id}/remove/{product_id}",
              web::delete().to(cart_handlers::remove_from_cart_handler),
            )
            .route(
              "/{user_id}/update/{product_id}",
              web::put().to(cart_handlers::update_cart_item_handler),
            ),
        )
        // Order Routes
        .service(
          web::scope("/orders")
            .route("/create", web::post().to(order_handlers::create_order_handler))
            .route("/{user_id}", web::get().to(order_handlers::list_orders_handler))
            .route("/{user_id}/{order_id}", web::get().to(order_handlers::get_order_handler))
            .route(
              "/{user_id}/{order_id}/status",
              web::put().to(order_handlers::update_order_status_handler),
            ),
        ),
    )
    .default_service(web::to(not_found_handler));
}
