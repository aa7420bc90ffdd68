pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::{User, UserProfile};
pub use errors::{AuthError, HashError, RepositoryError, TokenError, ValidationFailure};
pub use value_objects::{Email, Password, TokenClaims, TokenKind, TokenPair};
