use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::entities::User;
use super::errors::{AuthError, TokenError};
use super::value_objects::{Email, Password, TokenClaims, TokenKind};

/// Repository trait for user persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
  /// Creates a new user in the repository.
  ///
  /// Creation is atomic: either the full user is stored and returned, or
  /// nothing is left behind.
  async fn create(&self, user: User) -> Result<User, AuthError>;

  /// Finds a user by their unique identifier
  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError>;

  /// Finds a user by their email address, including the password hash
  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AuthError>;
}

/// Service trait for password hashing operations
#[async_trait]
pub trait PasswordHasher: Send + Sync {
  /// Hashes a plain text password with a fresh random salt
  async fn hash(&self, password: &Password) -> Result<String, AuthError>;

  /// Verifies a plain text password against a stored hash.
  ///
  /// Never fails: any hash-format or comparison problem yields `false`.
  async fn verify(&self, password: &Password, stored_hash: &str) -> bool;
}

/// Service trait for issuing and verifying signed tokens
pub trait TokenIssuer: Send + Sync {
  /// Issues a signed token of the given kind for the subject, with the
  /// configured lifetime for that kind embedded as an absolute expiry
  fn issue(&self, subject: Uuid, kind: TokenKind) -> Result<String, TokenError>;

  /// Verifies a signed token and returns its claims.
  ///
  /// Fails closed: signature mismatch, structural corruption, expiry in the
  /// past, and a kind other than `expected_kind` each yield a rejection,
  /// never a partially trusted result.
  fn verify(&self, token: &str, expected_kind: TokenKind) -> Result<TokenClaims, TokenError>;
}

/// Wall-clock source used for token issue and expiry checks.
///
/// Issue-time and verify-time comparisons must go through the same clock so
/// tests can control time.
pub trait Clock: Send + Sync {
  fn now(&self) -> DateTime<Utc>;
}
