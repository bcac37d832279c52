// storefront/src/store/mod.rs

//! Storage seam for carts and orders.
//!
//! Services only talk to [`KeyValueStore`], so the in-memory backend used by
//! the server can be swapped for a persistent one without touching cart or
//! order logic.

pub mod locks;
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

pub use locks::UserLocks;
pub use memory::InMemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("store backend failure: {0}")]
  Backend(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Values keyed by user id.
#[async_trait]
pub trait KeyValueStore<V>: Send + Sync
where
  V: Send + Sync + 'static,
{
  async fn get(&self, key: &str) -> StoreResult<Option<V>>;

  async fn set(&self, key: &str, value: V) -> StoreResult<()>;

  /// Removes the entry, returning the previous value if there was one.
  async fn delete(&self, key: &str) -> StoreResult<Option<V>>;
}
