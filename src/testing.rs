//! Shared test doubles: an in-memory user repository and a settable clock.

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Mutex;
use uuid::Uuid;

use crate::domain::auth::entities::User;
use crate::domain::auth::errors::{AuthError, RepositoryError};
use crate::domain::auth::ports::{Clock, UserRepository};
use crate::domain::auth::value_objects::Email;

/// In-memory user repository mirroring the Postgres implementation's
/// contract: atomic creation and a unique email constraint.
pub struct MemoryUserRepository {
  users: Mutex<Vec<User>>,
}

impl MemoryUserRepository {
  pub fn new() -> Self {
    Self {
      users: Mutex::new(Vec::new()),
    }
  }
}

impl Default for MemoryUserRepository {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
  async fn create(&self, user: User) -> Result<User, AuthError> {
    let mut users = self.users.lock().unwrap();

    if users.iter().any(|u| u.email == user.email) {
      return Err(AuthError::Repository(RepositoryError::DuplicateKey(
        user.email.clone(),
      )));
    }

    users.push(user.clone());
    Ok(user)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError> {
    let users = self.users.lock().unwrap();
    Ok(users.iter().find(|u| u.id == id).cloned())
  }

  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AuthError> {
    let users = self.users.lock().unwrap();
    Ok(users.iter().find(|u| u.email == email.as_str()).cloned())
  }
}

/// Clock that only moves when a test tells it to
pub struct FixedClock {
  now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
  pub fn new(now: DateTime<Utc>) -> Self {
    Self {
      now: Mutex::new(now),
    }
  }

  /// Moves the clock forward by the given duration
  pub fn advance(&self, duration: Duration) {
    let mut now = self.now.lock().unwrap();
    *now += duration;
  }
}

impl Default for FixedClock {
  fn default() -> Self {
    Self::new(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap())
  }
}

impl Clock for FixedClock {
  fn now(&self) -> DateTime<Utc> {
    *self.now.lock().unwrap()
  }
}
