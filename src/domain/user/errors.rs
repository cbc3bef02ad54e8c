use thiserror::Error;

use crate::domain::auth::errors::AuthError;

/// User domain errors.
#[derive(Debug, Error)]
pub enum UserError {
  #[error("User not found")]
  NotFound,

  #[error("Can not access user")]
  CanNotAccessUser,

  #[error(transparent)]
  Auth(#[from] AuthError),

  /// Document store failure; a bug or outage, not a user-facing condition.
  #[error("Storage failure: {0}")]
  Storage(String),
}

impl UserError {
  pub fn code(&self) -> &'static str {
    match self {
      Self::NotFound => "user-not-found",
      Self::CanNotAccessUser => "can-not-access-user",
      Self::Auth(error) => error.code(),
      Self::Storage(_) => "user-storage-failure",
    }
  }
}
