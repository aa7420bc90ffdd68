use std::sync::Arc;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::domain::auth::entities::UserProfile;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AccountService;

fn validate_uuid(value: &str) -> Result<(), ValidationError> {
  Uuid::parse_str(value)
    .map(|_| ())
    .map_err(|_| ValidationError::new("uuid"))
}

/// Command for fetching the current account
#[derive(Debug, Clone, Validate)]
pub struct GetCurrentAccountCommand {
  /// Identifier of the authenticated user, as carried by the access token
  #[validate(custom(function = validate_uuid, message = "User id must be a valid UUID"))]
  pub user_id: String,
}

/// Use case for fetching the profile of the currently authenticated user
pub struct GetCurrentAccountUseCase {
  account_service: Arc<AccountService>,
}

impl GetCurrentAccountUseCase {
  /// Creates a new instance of GetCurrentAccountUseCase
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  /// Executes the get current account use case.
  ///
  /// The command is validated before any lookup runs.
  ///
  /// # Errors
  /// Returns `AuthError::Validation` if the id is not a UUID and
  /// `AuthError::UserNotFound` if the account no longer exists.
  pub async fn execute(&self, command: GetCurrentAccountCommand) -> Result<UserProfile, AuthError> {
    command.validate()?;

    // Safe after validation
    let user_id = Uuid::parse_str(&command.user_id).expect("validated UUID");

    let profile = self
      .account_service
      .find_profile(user_id)
      .await?
      .ok_or(AuthError::UserNotFound)?;

    tracing::info!(user_id = %user_id, "Successfully fetched current account");

    Ok(profile)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::services::NewAccount;
  use crate::domain::auth::value_objects::{Email, Password};
  use crate::infrastructure::security::Argon2PasswordHasher;
  use crate::testing::MemoryUserRepository;

  fn fixture() -> (GetCurrentAccountUseCase, Arc<AccountService>) {
    let users = Arc::new(MemoryUserRepository::new());
    let hasher = Arc::new(Argon2PasswordHasher::new().unwrap());
    let account_service = Arc::new(AccountService::new(users, hasher));

    (
      GetCurrentAccountUseCase::new(account_service.clone()),
      account_service,
    )
  }

  #[tokio::test]
  async fn test_returns_profile_without_password_hash() {
    let (use_case, accounts) = fixture();

    let user_id = accounts
      .create_account(NewAccount {
        name: "Test User".to_string(),
        bio: "bio".to_string(),
        phone: "123".to_string(),
        email: Email::new("me@example.com").unwrap(),
        password: Password::new("secret1").unwrap(),
      })
      .await
      .unwrap();

    let profile = use_case
      .execute(GetCurrentAccountCommand {
        user_id: user_id.to_string(),
      })
      .await
      .unwrap();

    assert_eq!(profile.id, user_id);
    assert_eq!(profile.email, "me@example.com");

    let json = serde_json::to_string(&profile).unwrap();
    assert!(!json.contains("password"));
  }

  #[tokio::test]
  async fn test_missing_user_is_not_found() {
    let (use_case, _) = fixture();

    let error = use_case
      .execute(GetCurrentAccountCommand {
        user_id: Uuid::new_v4().to_string(),
      })
      .await
      .unwrap_err();

    assert!(matches!(error, AuthError::UserNotFound));
  }

  #[tokio::test]
  async fn test_malformed_id_fails_validation() {
    let (use_case, _) = fixture();

    let error = use_case
      .execute(GetCurrentAccountCommand {
        user_id: "not-a-uuid".to_string(),
      })
      .await
      .unwrap_err();

    assert!(matches!(error, AuthError::Validation(_)));
    assert!(error.to_string().contains("valid UUID"));
  }
}
