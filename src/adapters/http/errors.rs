use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use serde::Serialize;
use std::fmt;

use crate::domain::auth::errors::{AuthError, TokenError};

use super::dtos::ErrorResponse;

/// Message returned for anything the taxonomy does not expose
const GENERIC_ERROR_MESSAGE: &str = "Oops! something went wrong.";

/// Message returned for every token rejection, regardless of the reason
const UNAUTHENTICATED_MESSAGE: &str = "Unauthenticated";

/// API error type that maps domain errors to HTTP responses.
///
/// The set of kinds is closed: every error leaving the application layer is
/// classified as exactly one of these five before it reaches a client.
#[derive(Debug, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum ApiError {
  /// Schema violation or rejected input (400 Bad Request)
  Validation(String),

  /// Credential or token failure (401 Unauthorized)
  Authentication(String),

  /// Authenticated but not allowed (403 Forbidden)
  Permission(String),

  /// Requested entity does not exist (404 Not Found)
  NotFound(String),

  /// Anything unexpected (500 Internal Server Error); detail is logged
  /// server-side and never echoed to the client
  Internal(String),
}

impl ApiError {
  /// Classifies the error into its transport outcome: the HTTP status to
  /// return and whether the message may be exposed to the client verbatim.
  pub fn classify(&self) -> (StatusCode, bool) {
    match self {
      ApiError::Validation(_) => (StatusCode::BAD_REQUEST, true),
      ApiError::Authentication(_) => (StatusCode::UNAUTHORIZED, true),
      ApiError::Permission(_) => (StatusCode::FORBIDDEN, true),
      ApiError::NotFound(_) => (StatusCode::NOT_FOUND, true),
      ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, false),
    }
  }

  /// Machine-readable code for the error kind
  fn error_type(&self) -> &'static str {
    match self {
      ApiError::Validation(_) => "VALIDATION_ERROR",
      ApiError::Authentication(_) => "AUTHENTICATION_ERROR",
      ApiError::Permission(_) => "PERMISSION_ERROR",
      ApiError::NotFound(_) => "RESOURCE_NOT_FOUND_ERROR",
      ApiError::Internal(_) => "INTERNAL_SERVER_ERROR",
    }
  }

  fn message(&self) -> &str {
    match self {
      ApiError::Validation(msg)
      | ApiError::Authentication(msg)
      | ApiError::Permission(msg)
      | ApiError::NotFound(msg)
      | ApiError::Internal(msg) => msg,
    }
  }
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.error_type(), self.message())
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    self.classify().0
  }

  fn error_response(&self) -> HttpResponse {
    let (status, expose_detail) = self.classify();

    let message = if expose_detail {
      self.message().to_string()
    } else {
      // Full detail stays server-side
      tracing::error!(error = %self.message(), "Internal error");
      GENERIC_ERROR_MESSAGE.to_string()
    };

    let error_response = ErrorResponse {
      error: self.error_type().to_string(),
      code: None,
      message,
    };

    HttpResponse::build(status)
      .content_type(ContentType::json())
      .json(error_response)
  }
}

/// Convert AuthError to ApiError.
///
/// Every token rejection collapses into one authentication failure with a
/// fixed message, so callers get no signal usable for forging attempts.
impl From<AuthError> for ApiError {
  fn from(error: AuthError) -> Self {
    match error {
      AuthError::InvalidCredentials => {
        ApiError::Authentication(AuthError::InvalidCredentials.to_string())
      }
      AuthError::UserNotFound => ApiError::NotFound(AuthError::UserNotFound.to_string()),
      AuthError::UserCreationFailed => {
        ApiError::Validation(AuthError::UserCreationFailed.to_string())
      }
      AuthError::PermissionDenied => ApiError::Permission(AuthError::PermissionDenied.to_string()),
      AuthError::Validation(failure) => ApiError::Validation(failure.to_string()),
      AuthError::ValueObject(err) => ApiError::Validation(err.to_string()),
      AuthError::Token(TokenError::Signing(msg)) => ApiError::Internal(msg),
      AuthError::Token(_) => ApiError::Authentication(UNAUTHENTICATED_MESSAGE.to_string()),
      AuthError::Repository(err) => ApiError::Internal(err.to_string()),
      AuthError::Hash(err) => ApiError::Internal(err.to_string()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::errors::{HashError, RepositoryError, ValidationFailure};
  use crate::domain::auth::value_objects::TokenKind;

  #[test]
  fn test_classify_covers_all_kinds() {
    assert_eq!(
      ApiError::Validation("v".to_string()).classify(),
      (StatusCode::BAD_REQUEST, true)
    );
    assert_eq!(
      ApiError::Authentication("a".to_string()).classify(),
      (StatusCode::UNAUTHORIZED, true)
    );
    assert_eq!(
      ApiError::Permission("p".to_string()).classify(),
      (StatusCode::FORBIDDEN, true)
    );
    assert_eq!(
      ApiError::NotFound("n".to_string()).classify(),
      (StatusCode::NOT_FOUND, true)
    );
    assert_eq!(
      ApiError::Internal("i".to_string()).classify(),
      (StatusCode::INTERNAL_SERVER_ERROR, false)
    );
  }

  #[test]
  fn test_credential_failure_conversion() {
    let api_error: ApiError = AuthError::InvalidCredentials.into();

    assert_eq!(api_error.status_code(), StatusCode::UNAUTHORIZED);
    match api_error {
      ApiError::Authentication(msg) => assert_eq!(msg, "Invalid email or password."),
      other => panic!("Expected Authentication, got {:?}", other),
    }
  }

  #[test]
  fn test_token_rejections_all_normalize_to_one_message() {
    let reasons = [
      TokenError::Expired,
      TokenError::Invalid,
      TokenError::KindMismatch {
        expected: TokenKind::Access,
        actual: TokenKind::Refresh,
      },
    ];

    for reason in reasons {
      let api_error: ApiError = AuthError::Token(reason).into();
      match api_error {
        ApiError::Authentication(msg) => assert_eq!(msg, UNAUTHENTICATED_MESSAGE),
        other => panic!("Expected Authentication, got {:?}", other),
      }
    }
  }

  #[test]
  fn test_infrastructure_failures_become_internal() {
    let repo: ApiError = AuthError::Repository(RepositoryError::ConnectionFailed(
      "down".to_string(),
    ))
    .into();
    let hash: ApiError =
      AuthError::Hash(HashError::HashingFailed("bad params".to_string())).into();
    let signing: ApiError = AuthError::Token(TokenError::Signing("key".to_string())).into();

    for error in [repo, hash, signing] {
      assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
      // Internal errors never expose their detail
      assert!(!error.classify().1);
    }
  }

  #[test]
  fn test_aggregated_validation_reaches_the_client() {
    let failure = ValidationFailure::new(vec![
      "Invalid email format".to_string(),
      "Password is required".to_string(),
    ]);

    let api_error: ApiError = AuthError::Validation(failure).into();
    assert_eq!(api_error.status_code(), StatusCode::BAD_REQUEST);

    match api_error {
      ApiError::Validation(msg) => {
        assert!(msg.contains("Invalid email format"));
        assert!(msg.contains("Password is required"));
      }
      other => panic!("Expected Validation, got {:?}", other),
    }
  }

  #[test]
  fn test_not_found_conversion() {
    let api_error: ApiError = AuthError::UserNotFound.into();
    assert_eq!(api_error.status_code(), StatusCode::NOT_FOUND);
  }
}
