use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::user::entities::User;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
  pub error: String,
  pub message: String,
}

/// Generic success response
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
  pub success: bool,
}

/// Login request: an externally verified identity to exchange for a local
/// user id and a session token.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
  #[validate(length(min = 1, message = "Provider is required"))]
  pub provider: String,

  #[validate(length(min = 1, message = "Provider account id is required"))]
  pub provider_account_id: String,

  #[validate(email(message = "Invalid email format"))]
  pub email: Option<String>,

  #[serde(default)]
  pub first_name: String,

  #[serde(default)]
  pub last_name: String,

  #[serde(default)]
  pub picture: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
  pub user: User,
  pub token: String,
}

/// Create workspace request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateWorkspaceRequest {
  #[validate(length(min = 1, message = "Name is required"))]
  pub name: String,
}

/// Add user to workspace request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUserToWorkspaceRequest {
  pub user_id: Uuid,
}

/// Membership check response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipResponse {
  pub is_member: bool,
}
