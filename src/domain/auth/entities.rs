use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing an account in the system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  /// Unique identifier for the user, assigned at creation and never changed
  pub id: Uuid,
  /// User's display name
  pub name: String,
  /// Short free-form biography, may be empty
  pub bio: String,
  /// Contact phone number
  pub phone: String,
  /// User's email address (unique)
  pub email: String,
  /// Hashed password using Argon2
  pub password_hash: String,
  /// Roles assigned to the user, empty for freshly registered accounts
  pub roles: Vec<String>,
  /// Timestamp when the user was created
  pub created_at: DateTime<Utc>,
  /// Timestamp when the user was last updated
  pub updated_at: DateTime<Utc>,
}

impl User {
  /// Creates a new user with the given details
  pub fn new(
    name: String,
    bio: String,
    phone: String,
    email: String,
    password_hash: String,
  ) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      name,
      bio,
      phone,
      email,
      password_hash,
      roles: Vec::new(),
      created_at: now,
      updated_at: now,
    }
  }

  /// Creates a user from database fields (for reconstruction)
  #[allow(clippy::too_many_arguments)]
  pub fn from_db(
    id: Uuid,
    name: String,
    bio: String,
    phone: String,
    email: String,
    password_hash: String,
    roles: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      name,
      bio,
      phone,
      email,
      password_hash,
      roles,
      created_at,
      updated_at,
    }
  }

  /// Checks whether the user carries the given role
  pub fn has_role(&self, role: &str) -> bool {
    self.roles.iter().any(|r| r == role)
  }
}

/// Outward-facing view of a user with the password hash stripped.
///
/// This is the only user shape that leaves the application layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
  pub id: Uuid,
  pub name: String,
  pub bio: String,
  pub phone: String,
  pub email: String,
  pub roles: Vec<String>,
}

impl From<User> for UserProfile {
  fn from(user: User) -> Self {
    Self {
      id: user.id,
      name: user.name,
      bio: user.bio,
      phone: user.phone,
      email: user.email,
      roles: user.roles,
    }
  }
}
