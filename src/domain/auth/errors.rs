use std::fmt;
use thiserror::Error;

use super::value_objects::{TokenKind, ValueObjectError};

/// Main authentication error type
#[derive(Debug, Error)]
pub enum AuthError {
  #[error("Invalid email or password.")]
  InvalidCredentials,

  #[error("User not found")]
  UserNotFound,

  #[error("Failed to create user")]
  UserCreationFailed,

  #[error("Forbidden")]
  PermissionDenied,

  #[error("{0}")]
  Validation(ValidationFailure),

  #[error("Token error: {0}")]
  Token(#[from] TokenError),

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),

  #[error("Hash error: {0}")]
  Hash(#[from] HashError),

  #[error("Value object error: {0}")]
  ValueObject(#[from] ValueObjectError),
}

/// Token rejection reasons.
///
/// `Expired`, `Invalid`, and `KindMismatch` are kept distinct because callers
/// react differently (refresh-flow redirect vs re-login), even though the
/// HTTP boundary collapses them into one authentication failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
  #[error("Token has expired")]
  Expired,

  #[error("Invalid token")]
  Invalid,

  #[error("Unexpected {actual} token, expected {expected}")]
  KindMismatch {
    expected: TokenKind,
    actual: TokenKind,
  },

  #[error("Token signing failed: {0}")]
  Signing(String),
}

/// Repository-related errors
#[derive(Debug, Error)]
pub enum RepositoryError {
  #[error("Database connection failed: {0}")]
  ConnectionFailed(String),

  #[error("Query execution failed: {0}")]
  QueryFailed(String),

  #[error("Record not found")]
  NotFound,

  #[error("Duplicate key violation: {0}")]
  DuplicateKey(String),

  #[error("Database error: {0}")]
  DatabaseError(String),
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum HashError {
  #[error("Failed to hash password: {0}")]
  HashingFailed(String),
}

/// The full set of constraint violations found in one request payload.
///
/// Every constraint is evaluated before the failure is raised, so a client
/// sees all of its problems in a single round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
  violations: Vec<String>,
}

impl ValidationFailure {
  /// Creates a failure from an already collected set of violation messages
  pub fn new(violations: Vec<String>) -> Self {
    Self { violations }
  }

  /// Returns the individual violation messages
  pub fn violations(&self) -> &[String] {
    &self.violations
  }
}

impl fmt::Display for ValidationFailure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.violations.join(", "))
  }
}

impl From<validator::ValidationErrors> for ValidationFailure {
  fn from(errors: validator::ValidationErrors) -> Self {
    let messages: Vec<String> = errors
      .field_errors()
      .iter()
      .flat_map(|(field, errors)| {
        errors
          .iter()
          .map(|error| {
            error
              .message
              .as_ref()
              .map(|m| m.to_string())
              .unwrap_or_else(|| format!("Invalid field: {}", field))
          })
          .collect::<Vec<_>>()
      })
      .collect();

    ValidationFailure::new(messages)
  }
}

impl From<validator::ValidationErrors> for AuthError {
  fn from(errors: validator::ValidationErrors) -> Self {
    AuthError::Validation(ValidationFailure::from(errors))
  }
}

impl From<sqlx::Error> for RepositoryError {
  fn from(error: sqlx::Error) -> Self {
    match error {
      sqlx::Error::RowNotFound => RepositoryError::NotFound,
      sqlx::Error::Database(db_err) => {
        if db_err.is_unique_violation() {
          RepositoryError::DuplicateKey(db_err.message().to_string())
        } else {
          RepositoryError::DatabaseError(db_err.message().to_string())
        }
      }
      sqlx::Error::PoolTimedOut => RepositoryError::ConnectionFailed("Pool timed out".to_string()),
      sqlx::Error::PoolClosed => RepositoryError::ConnectionFailed("Pool closed".to_string()),
      _ => RepositoryError::QueryFailed(error.to_string()),
    }
  }
}

impl From<sqlx::Error> for AuthError {
  fn from(error: sqlx::Error) -> Self {
    AuthError::Repository(RepositoryError::from(error))
  }
}
