use actix_web::web;
use std::sync::Arc;

use crate::application::account::GetCurrentAccountUseCase;
use crate::application::auth::{LoginUseCase, RegisterUseCase};
use crate::application::root::GetApiIdentityUseCase;
use crate::domain::auth::ports::{TokenIssuer, UserRepository};

use super::handlers::account::get_current_account_handler;
use super::handlers::auth::{login_handler, register_handler};
use super::handlers::root::api_identity_handler;
use super::middleware::AuthMiddleware;

/// Configure authentication routes
///
/// Mounts the public authentication endpoints under the provided scope.
///
/// # Routes
///
/// - POST /register - Register a new user account
/// - POST /login - Authenticate and receive an access/refresh token pair
pub fn configure_auth_routes(
  cfg: &mut web::ServiceConfig,
  register_use_case: Arc<RegisterUseCase>,
  login_use_case: Arc<LoginUseCase>,
) {
  cfg
    .app_data(web::Data::new(register_use_case))
    .app_data(web::Data::new(login_use_case))
    .route("/register", web::post().to(register_handler))
    .route("/login", web::post().to(login_handler));
}

/// Configure account routes
///
/// Mounts the bearer-gated account endpoints under the provided scope. The
/// gate verifies the presented access token before any handler runs.
///
/// # Routes
///
/// - GET "" - Get the current account's profile
pub fn configure_account_routes(
  cfg: &mut web::ServiceConfig,
  get_account_use_case: Arc<GetCurrentAccountUseCase>,
  tokens: Arc<dyn TokenIssuer>,
  users: Arc<dyn UserRepository>,
) {
  cfg.app_data(web::Data::new(get_account_use_case)).service(
    web::resource("")
      .wrap(AuthMiddleware::new(tokens, users))
      .route(web::get().to(get_current_account_handler)),
  );
}

/// Configure root routes
///
/// # Routes
///
/// - GET / - Unauthenticated identity probe
pub fn configure_root_routes(
  cfg: &mut web::ServiceConfig,
  identity_use_case: Arc<GetApiIdentityUseCase>,
) {
  cfg
    .app_data(web::Data::new(identity_use_case))
    .route("/", web::get().to(api_identity_handler));
}
