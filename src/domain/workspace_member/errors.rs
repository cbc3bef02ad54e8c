use thiserror::Error;

use crate::domain::auth::errors::AuthError;

/// Workspace membership domain errors.
#[derive(Debug, Error)]
pub enum WorkspaceMemberError {
  #[error("Workspace member not found")]
  NotFound,

  #[error("Workspace member already exists")]
  AlreadyExists,

  #[error("Unauthorized workspace member operation")]
  UnauthorizedOperation,

  #[error("{value} - invalid member role")]
  InvalidRole { value: String },

  #[error(transparent)]
  Auth(#[from] AuthError),

  /// Document store failure; a bug or outage, not a user-facing condition.
  #[error("Storage failure: {0}")]
  Storage(String),
}

impl WorkspaceMemberError {
  pub fn code(&self) -> &'static str {
    match self {
      Self::NotFound => "workspace-member-not-found",
      Self::AlreadyExists => "workspace-member-already-exists",
      Self::UnauthorizedOperation => "unauthorized-workspace-member-operation",
      Self::InvalidRole { .. } => "invalid-member-role",
      Self::Auth(error) => error.code(),
      Self::Storage(_) => "workspace-member-storage-failure",
    }
  }
}
