use chrono::{DateTime, Utc};

use crate::domain::auth::ports::Clock;

/// Wall clock backed by the operating system time
pub struct SystemClock;

impl SystemClock {
  pub fn new() -> Self {
    Self
  }
}

impl Default for SystemClock {
  fn default() -> Self {
    Self::new()
  }
}

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Utc> {
    Utc::now()
  }
}
