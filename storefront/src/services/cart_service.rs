// storefront/src/services/cart_service.rs

//! Per-user shopping carts.
//!
//! A cart is an ordered list of [`CartLineItem`]s with at most one line per
//! product. Every mutation builds the new list first and writes it back only
//! when all checks pass, so a rejected request leaves the cart untouched.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::errors::{AppError, Result};
use crate::models::{CartLineItem, ProductId};
use crate::services::catalog_service::CatalogService;
use crate::store::{KeyValueStore, UserLocks};

pub type CartStore = Arc<dyn KeyValueStore<Vec<CartLineItem>>>;

pub struct CartService {
  catalog: Arc<CatalogService>,
  store: CartStore,
  locks: UserLocks,
}

impl CartService {
  pub fn new(catalog: Arc<CatalogService>, store: CartStore) -> Self {
    Self {
      catalog,
      store,
      locks: UserLocks::new(),
    }
  }

  /// Unknown users simply have an empty cart.
  #[instrument(name = "cart_service::get_cart", skip(self))]
  pub async fn get_cart(&self, user_id: &str) -> Result<Vec<CartLineItem>> {
    Ok(self.store.get(user_id).await?.unwrap_or_default())
  }

  /// `quantity` arrives as sent by the client, so values larger than any
  /// stock level are reported as insufficient stock rather than rejected.
  #[instrument(name = "cart_service::add_item", skip(self), fields(product_id = %product_id))]
  pub async fn add_item(&self, user_id: &str, product_id: ProductId, quantity: i64) -> Result<Vec<CartLineItem>> {
    let quantity = match u64::try_from(quantity) {
      Ok(quantity) if quantity > 0 => quantity,
      _ => {
        warn!(quantity, "Rejected add to cart with non-positive quantity.");
        return Err(AppError::Validation("Quantity must be a positive number".to_string()));
      }
    };

    let _guard = self.locks.lock(user_id).await;

    let product = self.catalog.get_by_id(product_id).await?;
    if quantity > u64::from(product.stock) {
      warn!(available = product.stock, requested = quantity, "Insufficient stock for new cart quantity.");
      return Err(AppError::InsufficientStock {
        product_name: product.name,
        available: product.stock,
        requested: quantity,
      });
    }

    let mut cart = self.store.get(user_id).await?.unwrap_or_default();
    match cart.iter_mut().find(|line| line.product_id == product_id) {
      Some(line) => {
        // Stock is checked against the combined total, not the increment.
        let combined = u64::from(line.quantity) + quantity;
        if combined > u64::from(product.stock) {
          warn!(available = product.stock, requested = combined, "Insufficient stock for merged cart quantity.");
          return Err(AppError::InsufficientStock {
            product_name: product.name,
            available: product.stock,
            requested: combined,
          });
        }
        // combined <= stock, which is a u32
        line.quantity = combined as u32;
      }
      // quantity <= stock, which is a u32
      None => cart.push(CartLineItem::snapshot(&product, quantity as u32)),
    }

    self.store.set(user_id, cart.clone()).await?;
    info!(lines = cart.len(), "Item added to cart.");
    Ok(cart)
  }

  /// Dropping a product that is not in an existing cart is a no-op.
  #[instrument(name = "cart_service::remove_item", skip(self), fields(product_id = %product_id))]
  pub async fn remove_item(&self, user_id: &str, product_id: ProductId) -> Result<Vec<CartLineItem>> {
    self.ensure_cart_exists(user_id).await?;
    let _guard = self.locks.lock(user_id).await;

    let mut cart = self.store.get(user_id).await?.ok_or(AppError::CartNotFound)?;
    let before = cart.len();
    cart.retain(|line| line.product_id != product_id);

    if cart.len() != before {
      self.store.set(user_id, cart.clone()).await?;
      info!("Item removed from cart.");
    }
    Ok(cart)
  }

  /// Sets a line's quantity verbatim, without re-checking stock. A quantity of
  /// zero or less removes the line.
  #[instrument(name = "cart_service::update_quantity", skip(self), fields(product_id = %product_id))]
  pub async fn update_quantity(&self, user_id: &str, product_id: ProductId, quantity: i64) -> Result<Vec<CartLineItem>> {
    self.ensure_cart_exists(user_id).await?;
    let _guard = self.locks.lock(user_id).await;

    let mut cart = self.store.get(user_id).await?.ok_or(AppError::CartNotFound)?;
    let index = cart
      .iter()
      .position(|line| line.product_id == product_id)
      .ok_or(AppError::CartItemNotFound(product_id))?;

    if quantity <= 0 {
      cart.remove(index);
      info!("Cart line removed by quantity update.");
    } else {
      let quantity = u32::try_from(quantity)
        .map_err(|_| AppError::Validation(format!("Quantity {} is too large", quantity)))?;
      cart[index].quantity = quantity;
      info!(quantity, "Cart line quantity updated.");
    }

    self.store.set(user_id, cart.clone()).await?;
    Ok(cart)
  }

  /// Resets the cart to empty, creating it if the user was never seen.
  #[instrument(name = "cart_service::clear_cart", skip(self))]
  pub async fn clear_cart(&self, user_id: &str) -> Result<()> {
    let _guard = self.locks.lock(user_id).await;
    self.store.set(user_id, Vec::new()).await?;
    info!("Cart cleared.");
    Ok(())
  }

  /// Unknown users are turned away before they get a lock entry. Carts are
  /// never deleted, so the answer still holds once the lock is taken.
  async fn ensure_cart_exists(&self, user_id: &str) -> Result<()> {
    match self.store.get(user_id).await? {
      Some(_) => Ok(()),
      None => Err(AppError::CartNotFound),
    }
  }
}
