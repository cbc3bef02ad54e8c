use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::adapters::http::dtos::{LoginRequest, LoginResponse, SuccessResponse};
use crate::adapters::http::errors::ApiError;
use crate::adapters::http::middleware::{SessionExt, session_cookie};
use crate::application::account::{
  CreateAccountCommand, CreateAccountUseCase, GetAccountByProviderQuery,
  GetAccountByProviderUseCase,
};
use crate::application::use_case::UseCase;
use crate::application::user::{
  CreateUserCommand, CreateUserUseCase, GetUserByIdQuery, GetUserByIdUseCase,
};
use crate::domain::account::entities::Provider;
use crate::domain::auth::services::AuthenticationService;
use crate::domain::auth::session::Session;
use crate::domain::auth::value_objects::SessionSource;

/// Handler for login
///
/// POST /api/auth/login
/// Body: LoginRequest (JSON), an identity already verified upstream
/// Response: LoginResponse (JSON) plus the session cookie
///
/// Exchanges the external identity for a local user id (creating the
/// account link and profile on first login), issues a session token and
/// delivers it as both a cookie and a bearer token.
pub async fn login_handler(
  request: web::Json<LoginRequest>,
  http_req: HttpRequest,
  get_account: web::Data<Arc<GetAccountByProviderUseCase>>,
  create_account: web::Data<Arc<CreateAccountUseCase>>,
  create_user: web::Data<Arc<CreateUserUseCase>>,
  get_user: web::Data<Arc<GetUserByIdUseCase>>,
  auth_service: web::Data<Arc<AuthenticationService>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let provider = Provider::parse(&request.provider).map_err(ApiError::Account)?;
  let mut session = http_req.session();

  let account = get_account
    .execute(
      GetAccountByProviderQuery {
        provider,
        provider_account_id: request.provider_account_id.clone(),
      },
      &mut session,
    )
    .await?;

  let user_id = match account {
    Some(account) => account.user_id,
    None => {
      let user_id = Uuid::new_v4();
      create_account
        .execute(
          CreateAccountCommand {
            user_id,
            provider,
            provider_account_id: request.provider_account_id.clone(),
          },
          &mut session,
        )
        .await?;
      create_user
        .execute(
          CreateUserCommand {
            user_id,
            email: request.email.clone(),
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            picture: request.picture.clone(),
          },
          &mut session,
        )
        .await?;
      user_id
    }
  };

  let user = get_user
    .execute(GetUserByIdQuery { user_id }, &mut session)
    .await?;

  let user_session = Session::user(
    user_id.to_string(),
    session.device().cloned(),
    Some(SessionSource::HttpRequest),
  )
  .map_err(ApiError::Auth)?;

  let artifacts = auth_service.authenticate(&user_session).await?;

  Ok(
    HttpResponse::Ok()
      .cookie(session_cookie(&artifacts.cookie))
      .json(LoginResponse {
        user,
        token: artifacts.token,
      }),
  )
}

/// Handler for logout
///
/// POST /api/auth/logout
/// Response: SuccessResponse (JSON) plus a cookie clear
pub async fn logout_handler(
  auth_service: web::Data<Arc<AuthenticationService>>,
) -> Result<HttpResponse, ApiError> {
  let cookie = auth_service.deauthenticate();
  Ok(
    HttpResponse::Ok()
      .cookie(session_cookie(&cookie))
      .json(SuccessResponse { success: true }),
  )
}

/// Handler for the current session
///
/// GET /api/auth/me
/// Response: the resolved session's serialized value
pub async fn current_session_handler(http_req: HttpRequest) -> HttpResponse {
  HttpResponse::Ok().json(http_req.session().to_value())
}
