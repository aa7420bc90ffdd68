pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use dtos::{
  ErrorResponse, IdentityResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
  UserResponse,
};
pub use errors::ApiError;
pub use middleware::{AuthMiddleware, AuthenticatedUser, RequestAuth};
pub use routes::{configure_account_routes, configure_auth_routes, configure_root_routes};
