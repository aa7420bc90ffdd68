use std::sync::Arc;
use uuid::Uuid;

use super::entities::{User, UserProfile};
use super::errors::AuthError;
use super::ports::{PasswordHasher, TokenIssuer, UserRepository};
use super::value_objects::{Email, Password, TokenKind, TokenPair};

/// Authentication service: credential checking and token issuance
pub struct AuthService {
  users: Arc<dyn UserRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
  tokens: Arc<dyn TokenIssuer>,
}

impl AuthService {
  /// Creates a new instance of AuthService
  pub fn new(
    users: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
  ) -> Self {
    Self {
      users,
      password_hasher,
      tokens,
    }
  }

  /// Checks a login attempt by email and password.
  ///
  /// Returns `Ok(None)` for both an unknown email and a wrong password, so
  /// callers cannot distinguish the two cases. The distinction only exists
  /// in the server-side logs.
  ///
  /// # Errors
  /// Returns `AuthError::Repository` if the lookup itself fails
  pub async fn check_login(
    &self,
    email: &Email,
    password: &Password,
  ) -> Result<Option<User>, AuthError> {
    let user = match self.users.find_by_email(email).await? {
      Some(user) => user,
      None => {
        tracing::warn!(email = %email, "Failed to login: user not found");
        return Ok(None);
      }
    };

    if !self
      .password_hasher
      .verify(password, &user.password_hash)
      .await
    {
      tracing::warn!(email = %email, "Failed to login: invalid email or password");
      return Ok(None);
    }

    tracing::debug!(email = %email, user_id = %user.id, "Successful login check");

    Ok(Some(user))
  }

  /// Issues one access and one refresh token for the given user
  ///
  /// # Errors
  /// Returns `AuthError::Token` if signing fails
  pub fn issue_token_pair(&self, user_id: Uuid) -> Result<TokenPair, AuthError> {
    let access_token = self.tokens.issue(user_id, TokenKind::Access)?;
    let refresh_token = self.tokens.issue(user_id, TokenKind::Refresh)?;

    tracing::debug!(user_id = %user_id, "Created auth token pair");

    Ok(TokenPair {
      access_token,
      refresh_token,
    })
  }
}

/// Input for account creation
#[derive(Debug, Clone)]
pub struct NewAccount {
  pub name: String,
  pub bio: String,
  pub phone: String,
  pub email: Email,
  pub password: Password,
}

/// Account service: user creation and profile lookup
pub struct AccountService {
  users: Arc<dyn UserRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
}

impl AccountService {
  /// Creates a new instance of AccountService
  pub fn new(users: Arc<dyn UserRepository>, password_hasher: Arc<dyn PasswordHasher>) -> Self {
    Self {
      users,
      password_hasher,
    }
  }

  /// Creates a new user account with a hashed password.
  ///
  /// # Errors
  /// Returns `AuthError::UserCreationFailed` if the repository rejects the
  /// creation (including duplicate emails); no partial account remains.
  pub async fn create_account(&self, account: NewAccount) -> Result<Uuid, AuthError> {
    let password_hash = self.password_hasher.hash(&account.password).await?;

    let user = User::new(
      account.name,
      account.bio,
      account.phone,
      account.email.into_inner(),
      password_hash,
    );

    let created = match self.users.create(user).await {
      Ok(user) => user,
      Err(error) => {
        tracing::warn!(error = %error, "Failed to create user");
        return Err(AuthError::UserCreationFailed);
      }
    };

    tracing::debug!(user_id = %created.id, "Successfully created user");

    Ok(created.id)
  }

  /// Looks up a user's profile by id, with the password hash stripped
  ///
  /// # Errors
  /// Returns `AuthError::Repository` if the lookup itself fails
  pub async fn find_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, AuthError> {
    let user = self.users.find_by_id(user_id).await?;

    if user.is_none() {
      tracing::warn!(user_id = %user_id, "Failed to find user: User not found");
    }

    Ok(user.map(UserProfile::from))
  }
}
