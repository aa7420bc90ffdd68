use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::adapters::http::{dtos::IdentityResponse, errors::ApiError};
use crate::application::root::GetApiIdentityUseCase;

/// Handler for the unauthenticated identity probe
///
/// GET /
/// Response: IdentityResponse (JSON) with status 200
pub async fn api_identity_handler(
  use_case: web::Data<Arc<GetApiIdentityUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = use_case.execute();

  Ok(HttpResponse::Ok().json(IdentityResponse {
    message: response.message,
  }))
}
