use std::sync::Arc;
use validator::Validate;

use crate::domain::auth::entities::UserProfile;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::{Email, Password};

/// Command for logging in a user
#[derive(Debug, Clone, Validate)]
pub struct LoginCommand {
  /// User's email address
  #[validate(email(message = "Invalid email format"))]
  pub email: String,
  /// User's password (plain text)
  #[validate(length(min = 1, message = "Password is required"))]
  pub password: String,
}

/// Response after successful user login
#[derive(Debug, Clone)]
pub struct LoginResponse {
  /// Profile of the authenticated user
  pub user: UserProfile,
  /// Short-lived signed token for regular requests
  pub access_token: String,
  /// Longer-lived signed token for minting new access tokens
  pub refresh_token: String,
}

/// Use case for logging in a user
pub struct LoginUseCase {
  auth_service: Arc<AuthService>,
}

impl LoginUseCase {
  /// Creates a new instance of LoginUseCase
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Executes the user login use case.
  ///
  /// The command is validated in full before any business logic runs; a
  /// schema violation reports every failed constraint at once.
  ///
  /// # Errors
  /// Returns `AuthError::Validation` on schema violations and
  /// `AuthError::InvalidCredentials` for an unknown email or a wrong
  /// password. Both credential failures carry the same message.
  pub async fn execute(&self, command: LoginCommand) -> Result<LoginResponse, AuthError> {
    command.validate()?;

    let email = Email::new(command.email)?;
    let password = Password::new(command.password)?;

    let user = self
      .auth_service
      .check_login(&email, &password)
      .await?
      .ok_or(AuthError::InvalidCredentials)?;

    let tokens = self.auth_service.issue_token_pair(user.id)?;

    tracing::info!(user_id = %user.id, email = %email, "Successfully logged in user");

    Ok(LoginResponse {
      user: UserProfile::from(user),
      access_token: tokens.access_token,
      refresh_token: tokens.refresh_token,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::application::auth::{RegisterCommand, RegisterUseCase};
  use crate::domain::auth::ports::TokenIssuer;
  use crate::domain::auth::services::AccountService;
  use crate::domain::auth::value_objects::TokenKind;
  use crate::infrastructure::security::{Argon2PasswordHasher, JwtTokenService};
  use crate::testing::{FixedClock, MemoryUserRepository};
  use std::time::Duration;

  struct Fixture {
    login: LoginUseCase,
    register: RegisterUseCase,
    tokens: Arc<JwtTokenService>,
  }

  fn fixture() -> Fixture {
    let users = Arc::new(MemoryUserRepository::new());
    let hasher = Arc::new(Argon2PasswordHasher::new().unwrap());
    let clock = Arc::new(FixedClock::default());
    let tokens = Arc::new(JwtTokenService::new(
      "test-secret",
      Duration::from_secs(3600),
      Duration::from_secs(86400),
      clock,
    ));

    let auth_service = Arc::new(AuthService::new(
      users.clone(),
      hasher.clone(),
      tokens.clone(),
    ));
    let account_service = Arc::new(AccountService::new(users, hasher));

    Fixture {
      login: LoginUseCase::new(auth_service),
      register: RegisterUseCase::new(account_service),
      tokens,
    }
  }

  fn register_command(email: &str, password: &str) -> RegisterCommand {
    RegisterCommand {
      name: "A".to_string(),
      bio: String::new(),
      phone: "123".to_string(),
      email: email.to_string(),
      password: password.to_string(),
    }
  }

  #[tokio::test]
  async fn test_login_after_register_returns_matching_subject() {
    let fixture = fixture();

    fixture
      .register
      .execute(register_command("a@x.com", "secret1"))
      .await
      .unwrap();

    let response = fixture
      .login
      .execute(LoginCommand {
        email: "a@x.com".to_string(),
        password: "secret1".to_string(),
      })
      .await
      .unwrap();

    assert_eq!(response.user.email, "a@x.com");

    // The issued tokens carry the registered user's id and the right kinds
    let access = fixture
      .tokens
      .verify(&response.access_token, TokenKind::Access)
      .unwrap();
    let refresh = fixture
      .tokens
      .verify(&response.refresh_token, TokenKind::Refresh)
      .unwrap();

    assert_eq!(access.subject, response.user.id);
    assert_eq!(refresh.subject, response.user.id);
  }

  #[tokio::test]
  async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
    let fixture = fixture();

    fixture
      .register
      .execute(register_command("a@x.com", "secret1"))
      .await
      .unwrap();

    let wrong_password = fixture
      .login
      .execute(LoginCommand {
        email: "a@x.com".to_string(),
        password: "wrong".to_string(),
      })
      .await
      .unwrap_err();

    let unknown_email = fixture
      .login
      .execute(LoginCommand {
        email: "nobody@x.com".to_string(),
        password: "secret1".to_string(),
      })
      .await
      .unwrap_err();

    assert!(matches!(wrong_password, AuthError::InvalidCredentials));
    assert!(matches!(unknown_email, AuthError::InvalidCredentials));
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
  }

  #[tokio::test]
  async fn test_validation_aggregates_all_violations() {
    let fixture = fixture();

    let error = fixture
      .login
      .execute(LoginCommand {
        email: "not-an-email".to_string(),
        password: String::new(),
      })
      .await
      .unwrap_err();

    let message = error.to_string();
    assert!(matches!(error, AuthError::Validation(_)));
    assert!(message.contains("Invalid email format"));
    assert!(message.contains("Password is required"));
  }

  #[tokio::test]
  async fn test_validation_failure_runs_no_business_logic() {
    let fixture = fixture();

    // No user registered: an invalid payload must still fail with a
    // validation error, not a credential error
    let error = fixture
      .login
      .execute(LoginCommand {
        email: "not-an-email".to_string(),
        password: "secret1".to_string(),
      })
      .await
      .unwrap_err();

    assert!(matches!(error, AuthError::Validation(_)));
  }
}
