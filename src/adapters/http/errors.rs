use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::account::errors::AccountError;
use crate::domain::auth::errors::AuthError;
use crate::domain::user::errors::UserError;
use crate::domain::workspace::errors::WorkspaceError;
use crate::domain::workspace_member::errors::WorkspaceMemberError;

use super::dtos::ErrorResponse;

/// API error type that maps domain errors to HTTP responses. Typed domain
/// errors propagate here unchanged; this boundary owns the wire mapping.
#[derive(Debug)]
pub enum ApiError {
  /// Request shape or value validation failed (400 Bad Request)
  Validation(String),

  Auth(AuthError),
  Workspace(WorkspaceError),
  Member(WorkspaceMemberError),
  User(UserError),
  Account(AccountError),

  /// Programmer-class failure (500 Internal Server Error)
  Internal(String),
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::Auth(error) => write!(f, "{}", error),
      ApiError::Workspace(error) => write!(f, "{}", error),
      ApiError::Member(error) => write!(f, "{}", error),
      ApiError::User(error) => write!(f, "{}", error),
      ApiError::Account(error) => write!(f, "{}", error),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ApiError {
  /// Stable machine code carried in the response body.
  fn code(&self) -> &'static str {
    match self {
      ApiError::Validation(_) => "validation-error",
      ApiError::Auth(error) => error.code(),
      ApiError::Workspace(error) => error.code(),
      ApiError::Member(error) => error.code(),
      ApiError::User(error) => error.code(),
      ApiError::Account(error) => error.code(),
      ApiError::Internal(_) => "internal-error",
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::Auth(error) => status_from(error),
      ApiError::Workspace(error) => match error {
        WorkspaceError::NotFound | WorkspaceError::UserNotInWorkspace => StatusCode::NOT_FOUND,
        WorkspaceError::UnauthorizedAccess => StatusCode::FORBIDDEN,
        WorkspaceError::UserAlreadyInWorkspace => StatusCode::CONFLICT,
        WorkspaceError::Auth(error) => status_from(error),
        WorkspaceError::Member(error) => member_status(error),
        WorkspaceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
      },
      ApiError::Member(error) => member_status(error),
      ApiError::User(error) => match error {
        UserError::NotFound => StatusCode::NOT_FOUND,
        UserError::CanNotAccessUser => StatusCode::FORBIDDEN,
        UserError::Auth(error) => status_from(error),
        UserError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
      },
      ApiError::Account(error) => match error {
        AccountError::AlreadyExists => StatusCode::CONFLICT,
        AccountError::InvalidProvider { .. } => StatusCode::BAD_REQUEST,
        AccountError::Auth(error) => status_from(error),
        AccountError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
      },
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();

    if status.is_server_error() {
      // Don't expose internal failure details to clients
      tracing::error!("Internal error: {}", self);
      return HttpResponse::build(status)
        .insert_header(ContentType::json())
        .json(ErrorResponse {
          error: "internal-error".to_string(),
          message: "An internal server error occurred".to_string(),
        });
    }

    HttpResponse::build(status)
      .insert_header(ContentType::json())
      .json(ErrorResponse {
        error: self.code().to_string(),
        message: self.to_string(),
      })
  }
}

fn status_from(error: &AuthError) -> StatusCode {
  StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn member_status(error: &WorkspaceMemberError) -> StatusCode {
  match error {
    WorkspaceMemberError::NotFound => StatusCode::NOT_FOUND,
    WorkspaceMemberError::AlreadyExists => StatusCode::CONFLICT,
    WorkspaceMemberError::UnauthorizedOperation => StatusCode::FORBIDDEN,
    WorkspaceMemberError::InvalidRole { .. } => StatusCode::BAD_REQUEST,
    WorkspaceMemberError::Auth(error) => status_from(error),
    WorkspaceMemberError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
  }
}

impl From<AuthError> for ApiError {
  fn from(error: AuthError) -> Self {
    ApiError::Auth(error)
  }
}

impl From<WorkspaceError> for ApiError {
  fn from(error: WorkspaceError) -> Self {
    ApiError::Workspace(error)
  }
}

impl From<WorkspaceMemberError> for ApiError {
  fn from(error: WorkspaceMemberError) -> Self {
    ApiError::Member(error)
  }
}

impl From<UserError> for ApiError {
  fn from(error: UserError) -> Self {
    ApiError::User(error)
  }
}

impl From<AccountError> for ApiError {
  fn from(error: AccountError) -> Self {
    ApiError::Account(error)
  }
}

impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    ApiError::Validation(errors.to_string())
  }
}
