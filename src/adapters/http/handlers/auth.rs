use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::adapters::http::{
  dtos::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserResponse},
  errors::ApiError,
};
use crate::application::auth::{
  LoginCommand, LoginResponse as UseCaseLoginResponse, LoginUseCase, RegisterCommand,
  RegisterResponse as UseCaseRegisterResponse, RegisterUseCase,
};

/// Handler for user registration
///
/// POST /api/auth/register
/// Body: RegisterRequest (JSON)
/// Response: RegisterResponse (JSON) with status 201
pub async fn register_handler(
  request: web::Json<RegisterRequest>,
  use_case: web::Data<Arc<RegisterUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let request = request.into_inner();

  let command = RegisterCommand {
    name: request.name,
    bio: request.bio,
    phone: request.phone,
    email: request.email,
    password: request.password,
  };

  let response: UseCaseRegisterResponse = use_case.execute(command).await?;

  let api_response = RegisterResponse {
    message: response.message,
  };

  Ok(HttpResponse::Created().json(api_response))
}

/// Handler for user login
///
/// POST /api/auth/login
/// Body: LoginRequest (JSON)
/// Response: LoginResponse (JSON) with status 200
pub async fn login_handler(
  request: web::Json<LoginRequest>,
  use_case: web::Data<Arc<LoginUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let request = request.into_inner();

  let command = LoginCommand {
    email: request.email,
    password: request.password,
  };

  let response: UseCaseLoginResponse = use_case.execute(command).await?;

  let api_response = LoginResponse {
    user: UserResponse::from(response.user),
    access_token: response.access_token,
    refresh_token: response.refresh_token,
  };

  Ok(HttpResponse::Ok().json(api_response))
}
