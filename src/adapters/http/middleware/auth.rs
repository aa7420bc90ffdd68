use actix_web::{
  Error, HttpMessage, HttpResponse, ResponseError,
  body::EitherBody,
  dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures_util::future::LocalBoxFuture;
use std::{
  future::{Ready, ready},
  rc::Rc,
  sync::Arc,
};
use uuid::Uuid;

use crate::adapters::http::errors::ApiError;
use crate::domain::auth::ports::{TokenIssuer, UserRepository};
use crate::domain::auth::value_objects::TokenKind;

/// Identifier of the authenticated user, attached to request extensions by
/// [`AuthMiddleware`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
  pub id: Uuid,
}

/// Authentication middleware gating bearer-token protected routes.
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies signature, expiry, and kind (an access token is required)
/// 3. Confirms the token's subject still exists
/// 4. Attaches the authenticated user id to request extensions
///
/// Every rejection, whatever the underlying reason, is answered with the
/// same 401 so the response carries no signal usable for forging tokens.
pub struct AuthMiddleware {
  tokens: Arc<dyn TokenIssuer>,
  users: Arc<dyn UserRepository>,
}

impl AuthMiddleware {
  /// Creates a new authentication middleware
  ///
  /// # Arguments
  ///
  /// * `tokens` - Verifier for presented bearer tokens
  /// * `users` - Repository used to confirm the subject still exists
  pub fn new(tokens: Arc<dyn TokenIssuer>, users: Arc<dyn UserRepository>) -> Self {
    Self { tokens, users }
  }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Transform = AuthMiddlewareService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(AuthMiddlewareService {
      service: Rc::new(service),
      tokens: self.tokens.clone(),
      users: self.users.clone(),
    }))
  }
}

pub struct AuthMiddlewareService<S> {
  service: Rc<S>,
  tokens: Arc<dyn TokenIssuer>,
  users: Arc<dyn UserRepository>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let service = Rc::clone(&self.service);
    let tokens = self.tokens.clone();
    let users = self.users.clone();

    Box::pin(async move {
      // Extract bearer token from Authorization header
      let bearer_token = match extract_bearer_token(&req) {
        Some(token) => token,
        None => return Ok(unauthenticated(req)),
      };

      // Verify signature, expiry, and kind
      let claims = match tokens.verify(&bearer_token, TokenKind::Access) {
        Ok(claims) => claims,
        Err(e) => {
          tracing::warn!(error = %e, "Failed to authenticate bearer token");
          return Ok(unauthenticated(req));
        }
      };

      // Confirm the subject still exists
      let user = match users.find_by_id(claims.subject).await {
        Ok(Some(user)) => user,
        Ok(None) => {
          tracing::warn!(user_id = %claims.subject, "Failed to authenticate: user not found");
          return Ok(unauthenticated(req));
        }
        Err(e) => {
          tracing::error!(error = %e, "Failed to authenticate: user lookup failed");
          return Ok(unauthenticated(req));
        }
      };

      tracing::debug!(user_id = %user.id, "Successfully authenticated user");

      // Attach the authenticated user id to request extensions
      req.extensions_mut().insert(AuthenticatedUser { id: user.id });

      // Call the next service
      let res = service.call(req).await?;
      Ok(res.map_into_left_body())
    })
  }
}

/// Extract bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
  req
    .headers()
    .get("Authorization")
    .and_then(|h| h.to_str().ok())
    .and_then(|s| s.strip_prefix("Bearer "))
    .map(|s| s.to_string())
}

/// Builds the one 401 response used for every gate rejection
fn unauthenticated<B>(req: ServiceRequest) -> ServiceResponse<EitherBody<B>> {
  let (request, _) = req.into_parts();
  let error = ApiError::Authentication("Unauthenticated".to_string());
  let response = error.error_response().map_into_right_body();

  ServiceResponse::new(request, response)
}

/// Extension trait to easily extract the authenticated user from a request
pub trait RequestAuth {
  /// Get the authenticated user id from request extensions
  ///
  /// # Panics
  ///
  /// Panics if no authenticated user is present.
  /// This should only be called in handlers that are behind AuthMiddleware.
  fn authenticated_user(&self) -> AuthenticatedUser;
}

impl RequestAuth for actix_web::HttpRequest {
  fn authenticated_user(&self) -> AuthenticatedUser {
    self
      .extensions()
      .get::<AuthenticatedUser>()
      .copied()
      .expect("AuthenticatedUser not found in request extensions. Did you forget AuthMiddleware?")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::test::TestRequest;

  #[test]
  fn test_extract_bearer_token_valid() {
    let req = TestRequest::default()
      .insert_header(("Authorization", "Bearer test_token_123"))
      .to_srv_request();

    let token = extract_bearer_token(&req).unwrap();
    assert_eq!(token, "test_token_123");
  }

  #[test]
  fn test_extract_bearer_token_missing() {
    let req = TestRequest::default().to_srv_request();

    assert!(extract_bearer_token(&req).is_none());
  }

  #[test]
  fn test_extract_bearer_token_invalid_scheme() {
    let req = TestRequest::default()
      .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
      .to_srv_request();

    assert!(extract_bearer_token(&req).is_none());
  }
}
