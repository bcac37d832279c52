// storefront/src/models/mod.rs

//! Data structures exchanged with clients and held in the stores.

pub mod cart_item;
pub mod ids;
pub mod order;
pub mod product;

// Re-export the model structs for convenient access
pub use cart_item::CartLineItem;
pub use ids::ProductId;
pub use order::{CreateOrderRequest, Order, OrderLineItem, OrderStatus};
pub use product::Product;
