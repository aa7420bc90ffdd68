use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;

use crate::adapters::http::{dtos::UserResponse, errors::ApiError, middleware::RequestAuth};
use crate::application::account::{GetCurrentAccountCommand, GetCurrentAccountUseCase};

/// Handler for fetching the current account
///
/// GET /api/account
/// Headers: Authorization: Bearer <access token>
/// Response: UserResponse (JSON) with status 200
pub async fn get_current_account_handler(
  use_case: web::Data<Arc<GetCurrentAccountUseCase>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let authenticated = http_req.authenticated_user();

  let command = GetCurrentAccountCommand {
    user_id: authenticated.id.to_string(),
  };

  let profile = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(UserResponse::from(profile)))
}
