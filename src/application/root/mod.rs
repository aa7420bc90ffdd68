mod get_api_identity;

pub use get_api_identity::{ApiIdentityResponse, GetApiIdentityUseCase};
