/// Response carrying the API's self-description
#[derive(Debug, Clone)]
pub struct ApiIdentityResponse {
  pub message: String,
}

/// Use case answering the unauthenticated identity probe.
///
/// Accepts any input, so there is no validation contract to run.
#[derive(Debug, Default)]
pub struct GetApiIdentityUseCase;

impl GetApiIdentityUseCase {
  /// Creates a new instance of GetApiIdentityUseCase
  pub fn new() -> Self {
    Self
  }

  /// Executes the identity probe
  pub fn execute(&self) -> ApiIdentityResponse {
    let message = "Authentication App Master API".to_string();

    tracing::info!(message = %message, "Successfully get API identity");

    ApiIdentityResponse { message }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_identity_message() {
    let use_case = GetApiIdentityUseCase::new();

    let response = use_case.execute();
    assert_eq!(response.message, "Authentication App Master API");
  }
}
