// storefront/src/store/locks.rs

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

type LockRegistry = Mutex<HashMap<String, Arc<AsyncMutex<()>>>>;

/// One async mutex per user id. Cart and order mutations hold the user's
/// guard across their whole read-modify-write, since actix runs handlers on
/// several worker threads.
///
/// Entries only live while someone holds or waits for them; the last
/// [`UserLockGuard`] to drop removes its user's entry.
#[derive(Debug, Default)]
pub struct UserLocks {
  locks: LockRegistry,
}

impl UserLocks {
  pub fn new() -> Self {
    Self::default()
  }

  pub async fn lock(&self, user_id: &str) -> UserLockGuard<'_> {
    // The registry guard is released before awaiting the per-user lock.
    let user_lock = {
      let mut locks = self.locks.lock();
      locks
        .entry(user_id.to_string())
        .or_insert_with(|| Arc::new(AsyncMutex::new(())))
        .clone()
    };
    let guard = user_lock.lock_owned().await;
    UserLockGuard {
      registry: &self.locks,
      user_id: user_id.to_string(),
      guard: Some(guard),
    }
  }

  /// Number of users that currently hold or wait for a lock.
  pub fn active_users(&self) -> usize {
    self.locks.lock().len()
  }
}

/// Holds one user's lock. Dropping it releases the lock and prunes the
/// registry entry when no other task references it.
#[derive(Debug)]
pub struct UserLockGuard<'a> {
  registry: &'a LockRegistry,
  user_id: String,
  guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for UserLockGuard<'_> {
  fn drop(&mut self) {
    // Release first so the guard's own Arc is not counted below.
    drop(self.guard.take());

    // Waiters clone the Arc while holding the registry lock, so a count of
    // one under that lock means nobody else can reach this entry.
    let mut locks = self.registry.lock();
    if let Some(entry) = locks.get(&self.user_id) {
      if Arc::strong_count(entry) == 1 {
        locks.remove(&self.user_id);
      }
    }
  }
}
