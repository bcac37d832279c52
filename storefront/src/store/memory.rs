// storefront/src/store/memory.rs

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use super::{KeyValueStore, StoreResult};

/// Process-memory backend. Contents live as long as the store does.
#[derive(Debug)]
pub struct InMemoryStore<V> {
  entries: RwLock<HashMap<String, V>>,
}

impl<V> InMemoryStore<V> {
  pub fn new() -> Self {
    Self {
      entries: RwLock::new(HashMap::new()),
    }
  }
}

impl<V> Default for InMemoryStore<V> {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl<V> KeyValueStore<V> for InMemoryStore<V>
where
  V: Clone + Send + Sync + 'static,
{
  async fn get(&self, key: &str) -> StoreResult<Option<V>> {
    Ok(self.entries.read().get(key).cloned())
  }

  async fn set(&self, key: &str, value: V) -> StoreResult<()> {
    self.entries.write().insert(key.to_string(), value);
    Ok(())
  }

  async fn delete(&self, key: &str) -> StoreResult<Option<V>> {
    Ok(self.entries.write().remove(key))
  }
}
