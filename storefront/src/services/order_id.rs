// storefront/src/services/order_id.rs

use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Time-derived order ids: the current Unix time in milliseconds as a decimal
/// string. Ids are strictly increasing within the process; when two calls land
/// in the same millisecond (or the clock steps back) the later one takes the
/// previous id plus one.
#[derive(Debug, Default)]
pub struct OrderIdGenerator {
  last: AtomicU64,
}

impl OrderIdGenerator {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn next_id(&self) -> String {
    let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
    let mut previous = self.last.load(Ordering::Acquire);
    loop {
      let candidate = now.max(previous + 1);
      match self
        .last
        .compare_exchange_weak(previous, candidate, Ordering::AcqRel, Ordering::Acquire)
      {
        Ok(_) => return candidate.to_string(),
        Err(actual) => previous = actual,
      }
    }
  }
}
