use thiserror::Error;

use crate::domain::auth::errors::AuthError;
use crate::domain::workspace_member::errors::WorkspaceMemberError;

/// Workspace domain errors.
#[derive(Debug, Error)]
pub enum WorkspaceError {
  #[error("Workspace not found")]
  NotFound,

  #[error("Unauthorized workspace access")]
  UnauthorizedAccess,

  #[error("User already in workspace")]
  UserAlreadyInWorkspace,

  #[error("User not in workspace")]
  UserNotInWorkspace,

  #[error(transparent)]
  Auth(#[from] AuthError),

  /// Membership bookkeeping failed while a workspace operation was running.
  #[error(transparent)]
  Member(#[from] WorkspaceMemberError),

  /// Document store failure; a bug or outage, not a user-facing condition.
  #[error("Storage failure: {0}")]
  Storage(String),
}

impl WorkspaceError {
  pub fn code(&self) -> &'static str {
    match self {
      Self::NotFound => "workspace-not-found",
      Self::UnauthorizedAccess => "unauthorized-workspace-access",
      Self::UserAlreadyInWorkspace => "user-already-in-workspace",
      Self::UserNotInWorkspace => "user-not-in-workspace",
      Self::Auth(error) => error.code(),
      Self::Member(error) => error.code(),
      Self::Storage(_) => "workspace-storage-failure",
    }
  }
}
