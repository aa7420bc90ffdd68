use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::auth::entities::UserProfile;

/// Request for user registration
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
  /// User's display name
  pub name: String,

  /// Short biography, may be empty
  pub bio: String,

  /// Contact phone number
  pub phone: String,

  /// User's email address
  pub email: String,

  /// User's password
  pub password: String,
}

/// Request for user login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
  /// User's email address
  pub email: String,

  /// User's password
  pub password: String,
}

/// Response after successful user registration
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
  /// Confirmation message
  pub message: String,
}

/// Outward view of a user account
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
  pub id: Uuid,
  pub name: String,
  pub bio: String,
  pub phone: String,
  pub email: String,
  pub roles: Vec<String>,
}

impl From<UserProfile> for UserResponse {
  fn from(profile: UserProfile) -> Self {
    Self {
      id: profile.id,
      name: profile.name,
      bio: profile.bio,
      phone: profile.phone,
      email: profile.email,
      roles: profile.roles,
    }
  }
}

/// Response after successful user login
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
  /// Profile of the authenticated user
  pub user: UserResponse,

  /// Short-lived signed token for regular requests
  pub access_token: String,

  /// Longer-lived signed token for minting new access tokens
  pub refresh_token: String,
}

/// Response for the identity probe
#[derive(Debug, Clone, Serialize)]
pub struct IdentityResponse {
  pub message: String,
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  /// Error kind tag
  pub error: String,

  /// Optional machine-readable code
  #[serde(skip_serializing_if = "Option::is_none")]
  pub code: Option<String>,

  /// Human-readable error message
  pub message: String,
}
