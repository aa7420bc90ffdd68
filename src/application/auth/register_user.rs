use std::sync::Arc;
use validator::Validate;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::{AccountService, NewAccount};
use crate::domain::auth::value_objects::{Email, Password};

/// Command for registering a new user
#[derive(Debug, Clone, Validate)]
pub struct RegisterCommand {
  /// User's display name
  #[validate(length(min = 1, message = "Name is required"))]
  pub name: String,
  /// Short biography, may be empty
  pub bio: String,
  /// Contact phone number
  #[validate(length(min = 1, message = "Phone is required"))]
  pub phone: String,
  /// User's email address
  #[validate(email(message = "Invalid email format"))]
  pub email: String,
  /// User's password (plain text, will be hashed)
  #[validate(length(min = 1, message = "Password is required"))]
  pub password: String,
}

/// Response after successful user registration
#[derive(Debug, Clone)]
pub struct RegisterResponse {
  /// Confirmation message
  pub message: String,
}

/// Use case for registering a new user
pub struct RegisterUseCase {
  account_service: Arc<AccountService>,
}

impl RegisterUseCase {
  /// Creates a new instance of RegisterUseCase
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  /// Executes the user registration use case.
  ///
  /// The command is validated in full before any business logic runs; a
  /// schema violation reports every failed constraint at once.
  ///
  /// # Errors
  /// Returns `AuthError::Validation` on schema violations and
  /// `AuthError::UserCreationFailed` if the account store rejects the
  /// creation. No partial account remains on failure.
  pub async fn execute(&self, command: RegisterCommand) -> Result<RegisterResponse, AuthError> {
    command.validate()?;

    let email = Email::new(command.email)?;
    let password = Password::new(command.password)?;

    let user_id = self
      .account_service
      .create_account(NewAccount {
        name: command.name,
        bio: command.bio,
        phone: command.phone,
        email,
        password,
      })
      .await?;

    tracing::info!(user_id = %user_id, "Successfully created user");

    Ok(RegisterResponse {
      message: "Successfully created user".to_string(),
    })
  }
}
