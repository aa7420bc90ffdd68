use argon2::password_hash::SaltString;
use argon2::{
  Algorithm, Argon2, Params, Version,
  password_hash::{
    PasswordHash as Argon2PasswordHash, PasswordHasher as Argon2PasswordHasherTrait,
    PasswordVerifier,
  },
};
use async_trait::async_trait;

use crate::domain::auth::errors::{AuthError, HashError};
use crate::domain::auth::ports::PasswordHasher;
use crate::domain::auth::value_objects::Password;

/// Argon2id password hasher implementation
///
/// Uses the Argon2id algorithm with secure parameters:
/// - Memory cost: 19 MiB (19456 KiB)
/// - Time cost: 2 iterations
/// - Parallelism: 1 thread
/// - Algorithm: Argon2id (resistant to both side-channel and GPU attacks)
pub struct Argon2PasswordHasher {
  argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
  /// Creates a new Argon2PasswordHasher with the specified parameters
  pub fn new() -> Result<Self, AuthError> {
    // Memory cost: 19 MiB = 19456 KiB
    let memory_cost = 19456;
    // Time cost: 2 iterations
    let time_cost = 2;
    // Parallelism: 1 thread
    let parallelism = 1;
    // Output length: 32 bytes (default)
    let output_len = Some(32);

    let params = Params::new(memory_cost, time_cost, parallelism, output_len).map_err(|e| {
      AuthError::Hash(HashError::HashingFailed(format!(
        "Failed to create Argon2 params: {}",
        e
      )))
    })?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    Ok(Self { argon2 })
  }
}

impl Default for Argon2PasswordHasher {
  fn default() -> Self {
    Self::new().expect("Failed to create default Argon2PasswordHasher")
  }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
  /// Hashes a plain text password using Argon2id
  ///
  /// # Arguments
  /// * `password` - The password to hash
  ///
  /// # Returns
  /// * `Ok(String)` - The PHC-formatted hash, salt included
  /// * `Err(AuthError)` - If hashing fails
  async fn hash(&self, password: &Password) -> Result<String, AuthError> {
    // Generate a random salt using the OS's cryptographically secure RNG
    let salt = SaltString::generate(&mut rand::rngs::OsRng);

    let hash = self
      .argon2
      .hash_password(password.as_str().as_bytes(), &salt)
      .map_err(|e| {
        AuthError::Hash(HashError::HashingFailed(format!(
          "Failed to hash password: {}",
          e
        )))
      })?;

    Ok(hash.to_string())
  }

  /// Verifies a plain text password against a stored hash.
  ///
  /// Uses argon2's built-in constant-time comparison. Any failure, whether a
  /// malformed stored hash or a non-matching password, yields `false`; the
  /// hash-format case is additionally logged because it indicates corrupt
  /// stored data rather than a wrong password.
  async fn verify(&self, password: &Password, stored_hash: &str) -> bool {
    let parsed_hash = match Argon2PasswordHash::new(stored_hash) {
      Ok(hash) => hash,
      Err(e) => {
        tracing::warn!(error = %e, "Stored password hash has invalid format");
        return false;
      }
    };

    self
      .argon2
      .verify_password(password.as_str().as_bytes(), &parsed_hash)
      .is_ok()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_hash_password() {
    let hasher = Argon2PasswordHasher::new().unwrap();
    let password = Password::new("test_password_123").unwrap();

    let result = hasher.hash(&password).await;
    assert!(result.is_ok());

    let hash = result.unwrap();
    assert!(!hash.is_empty());
    assert!(hash.starts_with("$argon2id$"));
  }

  #[tokio::test]
  async fn test_verify_correct_password() {
    let hasher = Argon2PasswordHasher::new().unwrap();
    let password = Password::new("test_password_123").unwrap();

    let hash = hasher.hash(&password).await.unwrap();

    assert!(hasher.verify(&password, &hash).await);
  }

  #[tokio::test]
  async fn test_verify_incorrect_password() {
    let hasher = Argon2PasswordHasher::new().unwrap();
    let password = Password::new("test_password_123").unwrap();
    let wrong_password = Password::new("wrong_password").unwrap();

    let hash = hasher.hash(&password).await.unwrap();

    assert!(!hasher.verify(&wrong_password, &hash).await);
  }

  #[tokio::test]
  async fn test_hash_produces_different_salts() {
    let hasher = Argon2PasswordHasher::new().unwrap();
    let password = Password::new("test_password_123").unwrap();

    let hash1 = hasher.hash(&password).await.unwrap();
    let hash2 = hasher.hash(&password).await.unwrap();

    // Same password should produce different hashes due to random salt
    assert_ne!(hash1, hash2);

    // Both should verify correctly
    assert!(hasher.verify(&password, &hash1).await);
    assert!(hasher.verify(&password, &hash2).await);
  }

  #[tokio::test]
  async fn test_verify_invalid_hash_format_returns_false() {
    let hasher = Argon2PasswordHasher::new().unwrap();
    let password = Password::new("test_password_123").unwrap();

    // Malformed stored hashes must never make verification fail loudly
    assert!(!hasher.verify(&password, "not_a_valid_hash").await);
    assert!(!hasher.verify(&password, "").await);
  }

  #[tokio::test]
  async fn test_argon2_parameters() {
    let hasher = Argon2PasswordHasher::new().unwrap();
    let password = Password::new("test_password_123").unwrap();

    let hash = hasher.hash(&password).await.unwrap();

    // Verify it's using Argon2id
    assert!(hash.starts_with("$argon2id$"));

    let parsed = Argon2PasswordHash::new(&hash).unwrap();
    assert_eq!(parsed.version, Some(Version::V0x13 as u32));
  }
}
