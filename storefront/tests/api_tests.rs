// tests/api_tests.rs
mod common;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use common::*;
use serde_json::{json, Value};
use storefront::web::configure_app_routes;

macro_rules! init_app {
  ($catalog:expr) => {
    test::init_service(
      App::new()
        .app_data(web::Data::new(app_state($catalog)))
        .configure(configure_app_routes),
    )
    .await
  };
}

#[actix_web::test]
async fn test_health_check() {
  setup_tracing();
  let catalog = TempCatalog::with_sample_products();
  let app = init_app!(&catalog);

  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({ "status": "OK", "message": "Guldoze API is running" }));
}

#[actix_web::test]
async fn test_product_routes() {
  setup_tracing();
  let catalog = TempCatalog::with_sample_products();
  let app = init_app!(&catalog);

  let all: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/products").to_request()).await;
  assert_eq!(all.as_array().unwrap().len(), 5);
  assert_eq!(all[0]["careInstructions"], json!("Keep dry."));

  let one: Value =
    test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/products/2").to_request()).await;
  assert_eq!(one["name"], json!("Linen Pillow"));
  assert_eq!(one["price"], json!(39.5));

  let featured: Value = test::call_and_read_body_json(
    &app,
    test::TestRequest::get().uri("/api/products/featured/true").to_request(),
  )
  .await;
  assert_eq!(featured.as_array().unwrap().len(), 2);

  let textiles: Value = test::call_and_read_body_json(
    &app,
    test::TestRequest::get().uri("/api/products/category/textiles").to_request(),
  )
  .await;
  assert_eq!(textiles.as_array().unwrap().len(), 2);

  let empty: Value = test::call_and_read_body_json(
    &app,
    test::TestRequest::get().uri("/api/products/category/garden").to_request(),
  )
  .await;
  assert_eq!(empty, json!([]));
}

#[actix_web::test]
async fn test_product_not_found() {
  setup_tracing();
  let catalog = TempCatalog::with_sample_products();
  let app = init_app!(&catalog);

  for uri in ["/api/products/99", "/api/products/not-a-number"] {
    let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND, "uri {}", uri);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("not found"));
  }
}

#[actix_web::test]
async fn test_catalog_failure_is_server_error() {
  setup_tracing();
  let catalog = TempCatalog::with_sample_products();
  catalog.write_raw("not json");
  let app = init_app!(&catalog);

  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/products").to_request()).await;
  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({ "error": "Failed to load product catalog" }));
}

#[actix_web::test]
async fn test_cart_flow() {
  setup_tracing();
  let catalog = TempCatalog::with_sample_products();
  let app = init_app!(&catalog);

  let empty: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/cart/u1").to_request()).await;
  assert_eq!(empty, json!([]));

  // quantity defaults to 1; productId may be a string
  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/cart/u1/add")
      .set_json(json!({ "productId": "1" }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["message"], json!("Item added to cart"));
  assert_eq!(body["cart"][0]["productId"], json!(1));
  assert_eq!(body["cart"][0]["quantity"], json!(1));

  let body: Value = test::call_and_read_body_json(
    &app,
    test::TestRequest::post()
      .uri("/api/cart/u1/add")
      .set_json(json!({ "productId": 1, "quantity": 2 }))
      .to_request(),
  )
  .await;
  assert_eq!(body["cart"].as_array().unwrap().len(), 1);
  assert_eq!(body["cart"][0]["quantity"], json!(3));

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/cart/u1/add")
      .set_json(json!({ "productId": 1, "quantity": 3 }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(
    body["error"],
    json!("Not enough stock for Oak Chair. Available: 5, Requested: 6")
  );

  let body: Value = test::call_and_read_body_json(
    &app,
    test::TestRequest::put()
      .uri("/api/cart/u1/update/1")
      .set_json(json!({ "quantity": 4 }))
      .to_request(),
  )
  .await;
  assert_eq!(body["message"], json!("Cart updated"));
  assert_eq!(body["cart"][0]["quantity"], json!(4));

  let body: Value = test::call_and_read_body_json(
    &app,
    test::TestRequest::delete().uri("/api/cart/u1/remove/1").to_request(),
  )
  .await;
  assert_eq!(body, json!({ "message": "Item removed from cart", "cart": [] }));

  let body: Value =
    test::call_and_read_body_json(&app, test::TestRequest::delete().uri("/api/cart/u1/clear").to_request()).await;
  assert_eq!(body, json!({ "message": "Cart cleared" }));
}

#[actix_web::test]
async fn test_cart_error_statuses() {
  setup_tracing();
  let catalog = TempCatalog::with_sample_products();
  let app = init_app!(&catalog);

  let cases = vec![
    (
      test::TestRequest::post()
        .uri("/api/cart/u2/add")
        .set_json(json!({ "productId": 99 }))
        .to_request(),
      StatusCode::NOT_FOUND,
    ),
    (
      test::TestRequest::post()
        .uri("/api/cart/u2/add")
        .set_json(json!({ "productId": 1, "quantity": -1 }))
        .to_request(),
      StatusCode::BAD_REQUEST,
    ),
    (
      test::TestRequest::post()
        .uri("/api/cart/u2/add")
        .set_json(json!({ "quantity": 1 }))
        .to_request(),
      StatusCode::BAD_REQUEST,
    ),
    (
      test::TestRequest::delete().uri("/api/cart/u2/remove/1").to_request(),
      StatusCode::NOT_FOUND,
    ),
    (
      test::TestRequest::put()
        .uri("/api/cart/u2/update/1")
        .set_json(json!({ "quantity": 1 }))
        .to_request(),
      StatusCode::NOT_FOUND,
    ),
    (
      test::TestRequest::delete().uri("/api/cart/u2/remove/abc").to_request(),
      StatusCode::BAD_REQUEST,
    ),
  ];

  for (req, expected) in cases {
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), expected);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
  }

  let body: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/cart/u2").to_request()).await;
  assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn test_add_quantity_larger_than_any_stock() {
  setup_tracing();
  let catalog = TempCatalog::with_sample_products();
  let app = init_app!(&catalog);

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/cart/u1/add")
      .set_json(json!({ "productId": 1, "quantity": 5_000_000_000_i64 }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(
    body,
    json!({ "error": "Not enough stock for Oak Chair. Available: 5, Requested: 5000000000" })
  );
}

#[actix_web::test]
async fn test_update_missing_item_in_existing_cart() {
  setup_tracing();
  let catalog = TempCatalog::with_sample_products();
  let app = init_app!(&catalog);

  let _ = test::call_service(&app, test::TestRequest::delete().uri("/api/cart/u3/clear").to_request()).await;
  let resp = test::call_service(
    &app,
    test::TestRequest::put()
      .uri("/api/cart/u3/update/2")
      .set_json(json!({ "quantity": 2 }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({ "error": "Item not found in cart" }));
}

#[actix_web::test]
async fn test_order_flow() {
  setup_tracing();
  let catalog = TempCatalog::with_sample_products();
  let app = init_app!(&catalog);

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/orders/create")
      .set_json(json!({
        "userId": "u1",
        "items": [{ "productId": 1, "name": "Oak Chair", "price": 120.0, "quantity": 2 }],
        "customerInfo": { "name": "Ada", "address": "1 Loop Rd" },
        "totalAmount": 240.0
      }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["message"], json!("Order created successfully"));
  let order_id = body["orderId"].as_str().unwrap().to_string();
  assert_eq!(body["order"]["orderId"], json!(order_id));
  assert_eq!(body["order"]["status"], json!("pending"));
  assert_eq!(body["order"]["customerInfo"]["address"], json!("1 Loop Rd"));
  assert!(body["order"].get("updatedAt").is_none());

  let list: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/orders/u1").to_request()).await;
  assert_eq!(list.as_array().unwrap().len(), 1);

  let one: Value = test::call_and_read_body_json(
    &app,
    test::TestRequest::get()
      .uri(&format!("/api/orders/u1/{}", order_id))
      .to_request(),
  )
  .await;
  assert_eq!(one["orderId"], json!(order_id));

  let body: Value = test::call_and_read_body_json(
    &app,
    test::TestRequest::put()
      .uri(&format!("/api/orders/u1/{}/status", order_id))
      .set_json(json!({ "status": "shipped" }))
      .to_request(),
  )
  .await;
  assert_eq!(body["message"], json!("Order status updated"));
  assert_eq!(body["order"]["status"], json!("shipped"));
  assert!(body["order"]["updatedAt"].is_string());
}

#[actix_web::test]
async fn test_order_error_statuses() {
  setup_tracing();
  let catalog = TempCatalog::with_sample_products();
  let app = init_app!(&catalog);

  let create = |body: Value| {
    test::TestRequest::post()
      .uri("/api/orders/create")
      .set_json(body)
      .to_request()
  };

  let cases = vec![
    (
      create(json!({ "userId": "u1", "items": [], "customerInfo": {}, "totalAmount": 1 })),
      StatusCode::BAD_REQUEST,
      "Cart is empty",
    ),
    (
      create(json!({ "userId": "u1", "items": [{ "productId": 1, "quantity": 1 }], "totalAmount": 1 })),
      StatusCode::BAD_REQUEST,
      "Missing required fields",
    ),
    (
      create(json!({
        "userId": "u1",
        "items": [{ "productId": 31, "quantity": 1 }],
        "customerInfo": {},
        "totalAmount": 1
      })),
      StatusCode::NOT_FOUND,
      "Product with ID 31 not found",
    ),
    (
      create(json!({
        "userId": "u1",
        "items": [{ "productId": 4, "quantity": 9 }],
        "customerInfo": {},
        "totalAmount": 1
      })),
      StatusCode::BAD_REQUEST,
      "Not enough stock for Walnut Table. Available: 2, Requested: 9",
    ),
    (
      test::TestRequest::get().uri("/api/orders/u1/123").to_request(),
      StatusCode::NOT_FOUND,
      "No orders found for this user",
    ),
    (
      test::TestRequest::put()
        .uri("/api/orders/u1/123/status")
        .set_json(json!({ "status": "shipped" }))
        .to_request(),
      StatusCode::NOT_FOUND,
      "No orders found for this user",
    ),
  ];

  for (req, expected_status, expected_error) in cases {
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), expected_status);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": expected_error }));
  }

  let list: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/orders/u1").to_request()).await;
  assert_eq!(list, json!([]));
}

#[actix_web::test]
async fn test_order_items_echo_client_fields() {
  setup_tracing();
  let catalog = TempCatalog::with_sample_products();
  let app = init_app!(&catalog);

  let item = json!({ "productId": 1, "quantity": 1, "color": "red", "sku": "X-1" });
  let body: Value = test::call_and_read_body_json(
    &app,
    test::TestRequest::post()
      .uri("/api/orders/create")
      .set_json(json!({
        "userId": "u1",
        "items": [item.clone()],
        "customerInfo": { "name": "Ada" },
        "totalAmount": 120
      }))
      .to_request(),
  )
  .await;
  assert_eq!(body["order"]["items"], json!([item.clone()]));

  let list: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/orders/u1").to_request()).await;
  assert_eq!(list[0]["items"], json!([item]));

  let order_id = body["orderId"].as_str().unwrap();
  for payload in [json!({ "status": "  " }), json!({})] {
    let resp = test::call_service(
      &app,
      test::TestRequest::put()
        .uri(&format!("/api/orders/u1/{}/status", order_id))
        .set_json(payload)
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let err: Value = test::read_body_json(resp).await;
    assert_eq!(err, json!({ "error": "Status is required" }));
  }
}

#[actix_web::test]
async fn test_status_update_on_unknown_order_of_known_user() {
  setup_tracing();
  let catalog = TempCatalog::with_sample_products();
  let app = init_app!(&catalog);

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/orders/create")
      .set_json(json!({
        "userId": 7,
        "items": [{ "productId": "3", "quantity": 1 }],
        "customerInfo": { "name": "Grace" },
        "totalAmount": 64
      }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::CREATED);

  // Numeric user ids are keyed by their decimal text.
  let resp = test::call_service(
    &app,
    test::TestRequest::put()
      .uri("/api/orders/7/bad-order-id/status")
      .set_json(json!({ "status": "shipped" }))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({ "error": "Order not found" }));
}

#[actix_web::test]
async fn test_malformed_body_and_unknown_route() {
  setup_tracing();
  let catalog = TempCatalog::with_sample_products();
  let app = init_app!(&catalog);

  let resp = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/cart/u1/add")
      .insert_header(("content-type", "application/json"))
      .set_payload("{ not json")
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));

  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/nowhere/at/all").to_request()).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({ "error": "Not found" }));
}
